//! Built-in scenes

use crate::generation::color::Color;
use crate::generation::group::ParticleGroup;
use crate::generation::scene::Scene;
use crate::generation::shape::Shape;
use crate::generation::velocity::VelocityRule;
use crate::simulation::states::NVec3;

/// Distance of each galaxy's center from the origin
const GALAXY_OFFSET: f64 = 700.0;

/// Speed at which galaxies approach the origin
const APPROACH_SPEED: f64 = 150.0;

/// Two nested rings around `center`, drifting with `bias`
///
/// Outer ring: 500 particles, R = 200, Vt = 150.
/// Inner ring: 1000 particles, R = 100, Vt = 50.
pub fn galaxy(name: &str, center: NVec3, bias: NVec3, color: Color) -> [ParticleGroup; 2] {
    [
        ParticleGroup::new(
            format!("{name}_ring"),
            500,
            Shape::ring_xz(200.0, center),
            VelocityRule::tangential(150.0).with_bias(bias),
            color,
        ),
        ParticleGroup::new(
            format!("{name}_center"),
            1000,
            Shape::ring_xz(100.0, center),
            VelocityRule::tangential(50.0).with_bias(bias),
            color,
        ),
    ]
}

/// Four galaxies on a cross in the XZ plane, all heading for the origin
/// so that they pass each other in a common collision
pub fn galaxies() -> Scene {
    let d = GALAXY_OFFSET;
    let s = APPROACH_SPEED;
    let specs = [
        ("g1", NVec3::new(-d, 0.0, 0.0), NVec3::new(0.0, 0.0, s), Color::RED),
        ("g2", NVec3::new(d, 0.0, 0.0), NVec3::new(0.0, 0.0, -s), Color::GREEN),
        ("g3", NVec3::new(0.0, 0.0, -d), NVec3::new(-s, 0.0, 0.0), Color::BLUE),
        ("g4", NVec3::new(0.0, 0.0, d), NVec3::new(s, 0.0, 0.0), Color::YELLOW),
    ];

    specs
        .into_iter()
        .flat_map(|(name, center, bias, color)| galaxy(name, center, bias, color))
        .fold(Scene::new("galaxies"), Scene::with)
}

/// Upright ring around an axis-mixed shell, both spinning in place
pub fn upright_shell() -> Scene {
    let origin = NVec3::zeros();

    Scene::new("upright_shell")
        .with(ParticleGroup::new(
            "ring",
            800,
            Shape::ring_xy(300.0, origin),
            VelocityRule::tangential(120.0),
            Color::CYAN,
        ))
        .with(ParticleGroup::new(
            "shell",
            1200,
            Shape::shell(150.0, 150.0, origin),
            VelocityRule::tangential(60.0),
            Color::MAGENTA,
        ))
}

pub fn builtin_scenes() -> Vec<Scene> {
    vec![galaxies(), upright_shell()]
}

pub fn find_builtin(name: &str) -> Option<Scene> {
    builtin_scenes().into_iter().find(|s| s.name == name)
}
