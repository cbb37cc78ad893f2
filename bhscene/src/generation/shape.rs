//! Shape samplers: map a particle's local index to a point on a parametric curve
//!
//! Every variant uses the index `i` directly as an angle in radians. The
//! angle is never wrapped into [0, 2π): for integer `i` the samples land
//! at irregular points around the curve and keep revisiting it, which is
//! what spreads a few hundred particles over the whole ring.
//!
//! Variants are deliberately kept apart (no shared axis/sign
//! parametrization):
//! - [`Shape::RingXZ`] – circle lying flat in the XZ plane
//! - [`Shape::RingXY`] – circle standing upright in the XY plane
//! - [`Shape::Shell`]  – axis-mixed curve, `k = 0` gives a ring in XY
//!
//! A filled disk is not a sampler of its own: stack several rings with the
//! same center as separate groups.

use crate::generation::error::{ensure_finite, GenerationError};
use crate::simulation::states::NVec3;

/// Parametric curve a particle group is laid out on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// `center + (R sin i, 0, R cos i)`
    RingXZ { radius: f64, center: NVec3 },

    /// `center + (R sin i, R cos i, 0)`
    RingXY { radius: f64, center: NVec3 },

    /// `center + (R sin i, R cos i, k cos i)` with `k = depth`
    Shell { radius: f64, depth: f64, center: NVec3 },
}

impl Shape {
    pub fn ring_xz(radius: f64, center: NVec3) -> Self {
        Self::RingXZ { radius, center }
    }

    pub fn ring_xy(radius: f64, center: NVec3) -> Self {
        Self::RingXY { radius, center }
    }

    pub fn shell(radius: f64, depth: f64, center: NVec3) -> Self {
        Self::Shell { radius, depth, center }
    }

    pub fn center(&self) -> NVec3 {
        match *self {
            Shape::RingXZ { center, .. }
            | Shape::RingXY { center, .. }
            | Shape::Shell { center, .. } => center,
        }
    }

    pub fn radius(&self) -> f64 {
        match *self {
            Shape::RingXZ { radius, .. }
            | Shape::RingXY { radius, .. }
            | Shape::Shell { radius, .. } => radius,
        }
    }

    /// Position of particle `i`
    pub fn sample(&self, i: usize) -> NVec3 {
        let t = i as f64; // radians, unbounded
        let (s, c) = (t.sin(), t.cos());

        match *self {
            Shape::RingXZ { radius, center } => center + NVec3::new(radius * s, 0.0, radius * c),
            Shape::RingXY { radius, center } => center + NVec3::new(radius * s, radius * c, 0.0),
            Shape::Shell { radius, depth, center } => {
                center + NVec3::new(radius * s, radius * c, depth * c)
            }
        }
    }

    /// Same parametric form as [`Shape::sample`] about the origin, evaluated
    /// at `angle` and scaled by `speed` instead of the radius
    ///
    /// The shell drops its depth term here, so the result stays
    /// perpendicular to `sample(i) - center` for any depth.
    pub fn mirrored(&self, angle: f64, speed: f64) -> NVec3 {
        let (s, c) = (angle.sin(), angle.cos());

        match *self {
            Shape::RingXZ { .. } => NVec3::new(speed * s, 0.0, speed * c),
            Shape::RingXY { .. } => NVec3::new(speed * s, speed * c, 0.0),
            Shape::Shell { .. } => NVec3::new(speed * s, speed * c, 0.0),
        }
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        ensure_finite("radius", self.radius())?;
        if let Shape::Shell { depth, .. } = *self {
            ensure_finite("shell depth", depth)?;
        }
        let c = self.center();
        for (axis, value) in ["x", "y", "z"].iter().zip(c.iter()) {
            ensure_finite(&format!("center.{axis}"), *value)?;
        }
        Ok(())
    }
}
