//! Initial-state snapshot: index-aligned positions, velocities and colors
//!
//! `positions[i]`, `velocities[i]` and `colors[i]` always describe the same
//! particle. Groups occupy contiguous index ranges in the order they were
//! added, recorded as [`GroupSpan`]s.

use std::ops::Range;

use serde::Serialize;

use crate::generation::color::Color;
use crate::generation::error::GenerationError;
use crate::generation::group::ParticleGroup;
use crate::simulation::states::{Body3, NVec3, System3};

/// Index range covered by one group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSpan {
    pub label: String,
    pub range: Range<usize>,
}

/// Generated initial conditions, handed off wholesale to the simulator and
/// the renderer
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "bevy", derive(bevy::prelude::Resource))]
pub struct Snapshot {
    positions: Vec<NVec3>,
    velocities: Vec<NVec3>,
    colors: Vec<Color>,
    spans: Vec<GroupSpan>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            positions: Vec::with_capacity(n),
            velocities: Vec::with_capacity(n),
            colors: Vec::with_capacity(n),
            spans: Vec::new(),
        }
    }

    /// Append every particle of `group`
    ///
    /// The group is validated before anything is written: on error the
    /// snapshot is left exactly as it was.
    pub fn push_group(&mut self, group: &ParticleGroup) -> Result<(), GenerationError> {
        let particles = group.particles()?;
        let start = self.len();

        self.positions.reserve(particles.len());
        self.velocities.reserve(particles.len());
        self.colors.reserve(particles.len());

        for (x, v, c) in particles {
            self.positions.push(x);
            self.velocities.push(v);
            self.colors.push(c);
        }

        self.spans.push(GroupSpan {
            label: group.label.clone(),
            range: start..self.len(),
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[NVec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[NVec3] {
        &self.velocities
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn spans(&self) -> &[GroupSpan] {
        &self.spans
    }

    /// First span with the given label
    pub fn span(&self, label: &str) -> Option<&GroupSpan> {
        self.spans.iter().find(|s| s.label == label)
    }

    /// The three parallel sequences
    pub fn into_parts(self) -> (Vec<NVec3>, Vec<NVec3>, Vec<Color>) {
        (self.positions, self.velocities, self.colors)
    }

    /// Simulator-facing system at t = 0, every body with the same mass and
    /// radius
    pub fn into_system(self, mass: f64, radius: f64) -> System3 {
        let bodies = self
            .positions
            .into_iter()
            .zip(self.velocities)
            .zip(self.colors)
            .map(|((x, v), color)| Body3 {
                x,
                v,
                m: mass,
                radius,
                color,
            })
            .collect();

        System3 { bodies, t: 0.0 }
    }
}
