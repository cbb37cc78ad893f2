//! Particle groups: one shape, one velocity rule and one color per batch

use crate::generation::color::Color;
use crate::generation::error::GenerationError;
use crate::generation::shape::Shape;
use crate::generation::velocity::VelocityRule;
use crate::simulation::states::NVec3;

/// Named batch of particles generated from a single recipe
///
/// `count` is signed so that a malformed definition (e.g. read from a
/// scene file) is reported as [`GenerationError::InvalidParameter`]
/// instead of being wrapped or clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleGroup {
    pub label: String,
    pub count: i64,
    pub shape: Shape,
    pub velocity: VelocityRule,
    pub color: Color,
}

impl ParticleGroup {
    pub fn new(
        label: impl Into<String>,
        count: i64,
        shape: Shape,
        velocity: VelocityRule,
        color: Color,
    ) -> Self {
        Self {
            label: label.into(),
            count,
            shape,
            velocity,
            color,
        }
    }

    /// Check every parameter and return the particle count
    pub fn validate(&self) -> Result<usize, GenerationError> {
        let count = usize::try_from(self.count).map_err(|_| {
            GenerationError::invalid(format!(
                "group `{}`: particle count must be non-negative, got {}",
                self.label, self.count
            ))
        })?;

        let in_group = |e: GenerationError| match e {
            GenerationError::InvalidParameter(msg) => {
                GenerationError::InvalidParameter(format!("group `{}`: {msg}", self.label))
            }
        };
        self.shape.validate().map_err(in_group)?;
        self.velocity.validate().map_err(in_group)?;

        Ok(count)
    }

    pub fn position(&self, i: usize) -> NVec3 {
        self.shape.sample(i)
    }

    pub fn velocity(&self, i: usize) -> NVec3 {
        self.velocity.sample(&self.shape, i)
    }

    /// `(position, velocity, color)` for local indices `0..count`
    pub fn particles(
        &self,
    ) -> Result<impl ExactSizeIterator<Item = (NVec3, NVec3, Color)> + '_, GenerationError> {
        let n = self.validate()?;
        Ok((0..n).map(move |i| (self.position(i), self.velocity(i), self.color)))
    }
}
