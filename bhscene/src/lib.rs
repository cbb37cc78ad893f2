pub mod simulation;
pub mod configuration;
pub mod generation;
pub mod benchmark;

pub use simulation::states::{Body3, System3, NVec3};
pub use generation::error::GenerationError;
pub use generation::color::Color;
pub use generation::shape::Shape;
pub use generation::velocity::{VelocityRule, TANGENT_PHASE};
pub use generation::group::ParticleGroup;
pub use generation::snapshot::{Snapshot, GroupSpan};
pub use generation::scene::Scene;
pub use generation::catalog::{builtin_scenes, find_builtin, galaxies, galaxy, upright_shell};

pub use configuration::config::{SceneConfig, GroupConfig, ShapeConfig, VelocityConfig};

pub use benchmark::benchmark::bench_generation;
