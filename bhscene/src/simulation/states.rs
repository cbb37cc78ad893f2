//! Core state types handed to the N-body simulator.
//!
//! - `NVec3` – nalgebra 3-vector used for every position and velocity
//! - `Body3` / `System3` – simulator-facing bodies built from a
//!   [`crate::Snapshot`]
//!
//! Each system holds the list of bodies and the current simulation time `t`.

use nalgebra::Vector3;

use crate::generation::color::Color;

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body3 {
    pub x: NVec3, // 3d position
    pub v: NVec3, // 3d velocity
    pub m: f64, // mass
    pub radius: f64, // radius (softening)
    pub color: Color, // draw color
}

#[derive(Debug, Clone, PartialEq)]
pub struct System3 {
    pub bodies: Vec<Body3>, // 3d collection of bodies
    pub t: f64, // time
}

impl System3 {
    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.m).sum()
    }

    /// Mass-weighted mean position, `None` without mass
    pub fn center_of_mass(&self) -> Option<NVec3> {
        let m = self.total_mass();
        if m == 0.0 {
            return None;
        }
        let weighted = self.bodies.iter().fold(NVec3::zeros(), |acc, b| acc + b.m * b.x);
        Some(weighted / m)
    }

    /// Total linear momentum
    pub fn momentum(&self) -> NVec3 {
        self.bodies.iter().fold(NVec3::zeros(), |acc, b| acc + b.m * b.v)
    }
}
