//! Velocity field rules: initial velocity for particle `i` of a group
//!
//! The tangential rule re-evaluates the group's own shape formula a phase
//! ahead of the position angle (see [`Shape::mirrored`]). With the
//! conventional phase of π/2 the result is perpendicular to the radius
//! vector at `i`, so the group starts out rotating instead of expanding or
//! collapsing. A constant bias
//! is added on top to give the whole group a bulk drift.

use std::f64::consts::FRAC_PI_2;

use crate::generation::error::{ensure_finite, GenerationError};
use crate::generation::shape::Shape;
use crate::simulation::states::NVec3;

/// Phase offset that makes the mirrored formula perpendicular to the radius
pub const TANGENT_PHASE: f64 = FRAC_PI_2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VelocityRule {
    /// `speed * shape(i + phase) + bias`, with `shape` the group's
    /// parametric form about its center
    Tangential {
        speed: f64, // tangential speed magnitude
        phase: f64, // radians added to the position angle
        bias: NVec3, // bulk translational velocity
    },
}

impl VelocityRule {
    /// Rotation at `speed` with the tangent phase and no drift
    pub fn tangential(speed: f64) -> Self {
        Self::Tangential {
            speed,
            phase: TANGENT_PHASE,
            bias: NVec3::zeros(),
        }
    }

    pub fn with_phase(self, phase: f64) -> Self {
        match self {
            Self::Tangential { speed, bias, .. } => Self::Tangential { speed, phase, bias },
        }
    }

    pub fn with_bias(self, bias: NVec3) -> Self {
        match self {
            Self::Tangential { speed, phase, .. } => Self::Tangential { speed, phase, bias },
        }
    }

    pub fn bias(&self) -> NVec3 {
        match *self {
            Self::Tangential { bias, .. } => bias,
        }
    }

    /// Velocity of particle `i` of a group laid out on `shape`
    pub fn sample(&self, shape: &Shape, i: usize) -> NVec3 {
        match *self {
            Self::Tangential { speed, phase, bias } => {
                shape.mirrored(i as f64 + phase, speed) + bias
            }
        }
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        match *self {
            Self::Tangential { speed, phase, bias } => {
                ensure_finite("speed", speed)?;
                ensure_finite("phase", phase)?;
                for (axis, value) in ["x", "y", "z"].iter().zip(bias.iter()) {
                    ensure_finite(&format!("bias.{axis}"), *value)?;
                }
                Ok(())
            }
        }
    }
}
