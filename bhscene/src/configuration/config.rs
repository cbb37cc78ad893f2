//! Configuration types for loading scenes from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scene. A scene consists of:
//!
//! - [`SceneConfig`]    – top-level wrapper (scene name + ordered groups)
//! - [`GroupConfig`]    – one particle group: count, shape, velocity, color
//! - [`ShapeConfig`]    – which parametric curve the group is laid out on
//! - [`VelocityConfig`] – tangential speed, phase and bulk drift
//!
//! # YAML format
//! The first galaxy of the built-in `galaxies` scene:
//!
//! ```yaml
//! name: galaxies
//! groups:
//!   - label: g1_ring
//!     count: 500
//!     shape:
//!       kind: ring_xz          # ring_xz | ring_xy | shell
//!       radius: 200.0
//!       center: [-700.0, 0.0, 0.0]
//!     velocity:
//!       speed: 150.0
//!       phase: 1.5707963267948966   # optional, defaults to pi/2
//!       bias: [0.0, 0.0, 150.0]     # optional, defaults to zero
//!     color: [255, 0, 0, 255]
//!   - label: g1_center
//!     count: 1000
//!     shape: { kind: ring_xz, radius: 100.0, center: [-700.0, 0.0, 0.0] }
//!     velocity: { speed: 50.0, bias: [0.0, 0.0, 150.0] }
//!     color: [255, 0, 0, 255]
//! ```
//!
//! Nothing here is validated; [`crate::Scene::build_scene`] maps the
//! configuration onto runtime types and reports malformed values.

use serde::Deserialize;

use crate::generation::color::Color;
use crate::generation::velocity::TANGENT_PHASE;

/// Which curve a group samples its positions from
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind")]
pub enum ShapeConfig {
    #[serde(rename = "ring_xz")] // flat ring: (R sin i, 0, R cos i)
    RingXZ {
        radius: f64,
        #[serde(default)]
        center: Vec<f64>,
    },

    #[serde(rename = "ring_xy")] // upright ring: (R sin i, R cos i, 0)
    RingXY {
        radius: f64,
        #[serde(default)]
        center: Vec<f64>,
    },

    #[serde(rename = "shell")] // axis-mixed: (R sin i, R cos i, k cos i)
    Shell {
        radius: f64,
        depth: f64,
        #[serde(default)]
        center: Vec<f64>,
    },
}

/// Tangential velocity rule
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct VelocityConfig {
    pub speed: f64, // tangential speed
    #[serde(default = "default_phase")]
    pub phase: f64, // radians ahead of the position angle
    #[serde(default)]
    pub bias: Vec<f64>, // bulk drift, empty = zero
}

fn default_phase() -> f64 {
    TANGENT_PHASE
}

/// Configuration for a single particle group
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GroupConfig {
    pub label: String,
    pub count: i64, // signed so negative values reach validation
    pub shape: ShapeConfig,
    pub velocity: VelocityConfig,
    pub color: Color, // [r, g, b, a]
}

/// Top-level scene configuration loaded from YAML
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub name: String,
    pub groups: Vec<GroupConfig>,
}

impl SceneConfig {
    pub fn from_yaml(src: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_phase_bias_and_center() {
        let cfg = SceneConfig::from_yaml(
            r#"
name: tiny
groups:
  - label: a
    count: 3
    shape: { kind: ring_xy, radius: 2.0 }
    velocity: { speed: 1.0 }
    color: [1, 2, 3, 4]
"#,
        )
        .unwrap();

        let g = &cfg.groups[0];
        assert_eq!(g.velocity.phase, TANGENT_PHASE);
        assert!(g.velocity.bias.is_empty());
        assert_eq!(g.shape, ShapeConfig::RingXY { radius: 2.0, center: vec![] });
        assert_eq!(g.color, Color::new(1, 2, 3, 4));
    }

    #[test]
    fn unknown_shape_kind_is_rejected() {
        let res = SceneConfig::from_yaml(
            r#"
name: bad
groups:
  - label: a
    count: 1
    shape: { kind: torus, radius: 2.0 }
    velocity: { speed: 1.0 }
    color: [0, 0, 0, 255]
"#,
        );
        assert!(res.is_err());
    }
}
