use bhscene::{bench_generation, find_builtin, builtin_scenes};
use bhscene::{Scene, SceneConfig};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Built-in scene to generate
    #[arg(short, long, default_value = "galaxies")]
    scene: String,

    /// YAML scene under `scenes/`, takes precedence over `--scene`
    #[arg(short, long)]
    file_name: Option<String>,

    /// Mass given to every body when handing off to the simulator
    #[arg(long, default_value_t = 1.0)]
    mass: f64,

    /// Print the generated snapshot as YAML on stdout
    #[arg(long)]
    dump: bool,

    /// Time generation for growing particle counts instead
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scene_from_yaml(file_name: &str) -> Result<Scene> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenes").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scene_cfg: SceneConfig = serde_yaml::from_reader(reader)?;

    Ok(Scene::build_scene(scene_cfg)?)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_generation()?;
        return Ok(());
    }

    let scene = match &args.file_name {
        Some(file_name) => load_scene_from_yaml(file_name)?,
        None => find_builtin(&args.scene).ok_or_else(|| {
            let names: Vec<String> = builtin_scenes().into_iter().map(|s| s.name).collect();
            anyhow!("unknown scene `{}` (available: {})", args.scene, names.join(", "))
        })?,
    };

    let snapshot = scene.generate()?;
    info!("scene `{}`: {} particles in {} groups", scene.name, snapshot.len(), snapshot.spans().len());
    for span in snapshot.spans() {
        info!("  {:<16} [{}..{})", span.label, span.range.start, span.range.end);
    }

    if args.dump {
        print!("{}", serde_yaml::to_string(&snapshot)?);
    }

    let system = snapshot.into_system(args.mass, 0.0);
    info!("total mass = {}, momentum = {:?}", system.total_mass(), system.momentum().as_slice());
    if let Some(com) = system.center_of_mass() {
        info!("center of mass = {:?}", com.as_slice());
    }

    Ok(())
}
