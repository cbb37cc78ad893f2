use std::time::Instant;

use crate::generation::catalog::galaxy;
use crate::generation::color::Color;
use crate::generation::error::GenerationError;
use crate::generation::group::ParticleGroup;
use crate::generation::scene::Scene;
use crate::generation::shape::Shape;
use crate::generation::velocity::VelocityRule;
use crate::simulation::states::NVec3;

/// Time scene generation for growing particle counts, printed as CSV
pub fn bench_generation() -> Result<(), GenerationError> {
    // Total particle counts to test
    let ns: [i64; 5] = [1_000, 10_000, 100_000, 1_000_000, 4_000_000];
    let reps = 5;

    println!("N,generate_ms");

    for n in ns {
        // Two rings and a shell sharing the count
        let third = n / 3;
        let center = NVec3::new(-700.0, 0.0, 0.0);
        let scene = Scene::new("bench")
            .with(ParticleGroup::new(
                "flat",
                third,
                Shape::ring_xz(200.0, center),
                VelocityRule::tangential(150.0).with_bias(NVec3::new(0.0, 0.0, 150.0)),
                Color::RED,
            ))
            .with(ParticleGroup::new(
                "upright",
                third,
                Shape::ring_xy(200.0, center),
                VelocityRule::tangential(150.0),
                Color::GREEN,
            ))
            .with(ParticleGroup::new(
                "shell",
                n - 2 * third,
                Shape::shell(100.0, 50.0, center),
                VelocityRule::tangential(50.0),
                Color::BLUE,
            ));

        // Warm-up
        scene.generate()?;

        let start = Instant::now();
        for _ in 0..reps {
            let snapshot = scene.generate()?;
            debug_assert_eq!(snapshot.len() as i64, n);
        }
        let ms = start.elapsed().as_secs_f64() * 1e3 / reps as f64;

        println!("{},{:.6}", n, ms);
    }

    // Reference point: the built-in galaxy recipe on its own
    let [ring, core] = galaxy("g", NVec3::zeros(), NVec3::zeros(), Color::WHITE);
    let scene = Scene::new("galaxy").with(ring).with(core);
    let start = Instant::now();
    let snapshot = scene.generate()?;
    println!(
        "galaxy: {} particles in {:.6} ms",
        snapshot.len(),
        start.elapsed().as_secs_f64() * 1e3
    );

    Ok(())
}
