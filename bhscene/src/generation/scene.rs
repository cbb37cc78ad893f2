//! Scenes: ordered lists of particle groups and the generator entry point
//!
//! [`Scene::generate`] validates every group first and only then walks the
//! groups in order, so a malformed scene never produces a partial
//! [`Snapshot`]. Generation holds no state: calling it twice yields two
//! equal snapshots.

use log::debug;

use crate::configuration::config::{GroupConfig, SceneConfig, ShapeConfig, VelocityConfig};
use crate::generation::error::GenerationError;
use crate::generation::group::ParticleGroup;
use crate::generation::shape::Shape;
use crate::generation::snapshot::Snapshot;
use crate::generation::velocity::VelocityRule;
use crate::simulation::states::NVec3;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub name: String,
    pub groups: Vec<ParticleGroup>,
}

impl Scene {
    /// Create an empty scene
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            groups: Vec::new(),
        }
    }

    /// Append a group; output order follows insertion order
    pub fn with(mut self, group: ParticleGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Validate all groups and return the total particle count
    pub fn validate(&self) -> Result<usize, GenerationError> {
        let mut total: usize = 0;
        for group in &self.groups {
            let count = group.validate()?;
            total = total.checked_add(count).ok_or_else(|| {
                GenerationError::invalid(format!(
                    "scene `{}`: total particle count overflows at group `{}`",
                    self.name, group.label
                ))
            })?;
        }
        Ok(total)
    }

    /// Produce the initial-state snapshot
    pub fn generate(&self) -> Result<Snapshot, GenerationError> {
        let total = self.validate()?;

        let mut snapshot = Snapshot::with_capacity(total);
        for group in &self.groups {
            snapshot.push_group(group)?;
            debug!("scene `{}`: group `{}` -> {} particles", self.name, group.label, group.count);
        }

        debug!("scene `{}`: generated {} particles", self.name, snapshot.len());
        Ok(snapshot)
    }

    /// Map a deserialized [`SceneConfig`] onto a runtime scene
    pub fn build_scene(cfg: SceneConfig) -> Result<Self, GenerationError> {
        let groups = cfg
            .groups
            .into_iter()
            .map(build_group)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: cfg.name,
            groups,
        })
    }
}

fn build_group(gc: GroupConfig) -> Result<ParticleGroup, GenerationError> {
    let label = gc.label;
    let in_group = |what: &str| format!("group `{label}`: {what}");

    let shape = match gc.shape {
        ShapeConfig::RingXZ { radius, center } => {
            Shape::ring_xz(radius, to_vec3(&in_group("center"), &center)?)
        }
        ShapeConfig::RingXY { radius, center } => {
            Shape::ring_xy(radius, to_vec3(&in_group("center"), &center)?)
        }
        ShapeConfig::Shell { radius, depth, center } => {
            Shape::shell(radius, depth, to_vec3(&in_group("center"), &center)?)
        }
    };

    let VelocityConfig { speed, phase, bias } = gc.velocity;
    let velocity = VelocityRule::tangential(speed)
        .with_phase(phase)
        .with_bias(to_vec3(&in_group("bias"), &bias)?);

    Ok(ParticleGroup::new(label, gc.count, shape, velocity, gc.color))
}

/// Empty list means the zero vector; anything but 3 components is rejected
fn to_vec3(what: &str, v: &[f64]) -> Result<NVec3, GenerationError> {
    match v {
        [] => Ok(NVec3::zeros()),
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(GenerationError::invalid(format!(
            "{what} needs 3 components, got {}",
            v.len()
        ))),
    }
}
