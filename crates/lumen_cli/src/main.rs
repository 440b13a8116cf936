use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lumen_core::{load_scene, RenderSettings};
use lumen_renderer::{render, World};

mod demo;
mod output;

#[derive(Debug, Parser)]
#[command(version, about = "Monte Carlo path tracer", long_about = None)]
struct Args {
    /// Scene description (JSON); the built-in demo scene is used if omitted
    scene: Option<PathBuf>,

    /// Output image; `.ppm` is written as text, other extensions are encoded
    #[arg(short, long, default_value = "image.ppm")]
    output: PathBuf,

    /// Image width in pixels (height follows the aspect ratio)
    #[arg(long)]
    width: Option<u32>,

    /// Samples per pixel
    #[arg(short, long)]
    samples: Option<u32>,

    /// Maximum number of bounces per path
    #[arg(long)]
    max_depth: Option<u32>,

    /// Base random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads (defaults to one per core)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Print the effective scene as JSON and exit
    #[arg(long)]
    dump_scene: bool,
}

impl Args {
    /// Override scene render settings with the flags that were given.
    fn apply_overrides(&self, settings: &mut RenderSettings) {
        if let Some(width) = self.width {
            settings.image_width = width;
        }
        if let Some(samples) = self.samples {
            settings.samples_per_pixel = samples;
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = max_depth;
        }
        if let Some(seed) = self.seed {
            settings.seed = seed;
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let mut scene = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene given, using the demo scene");
            demo::demo_scene()
        }
    };
    args.apply_overrides(&mut scene.render);

    if args.dump_scene {
        println!("{}", scene.to_json_string()?);
        return Ok(());
    }

    let world = World::from_description(&scene).context("Invalid scene")?;

    let image = match args.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to start render threads")?
            .install(|| render(&world)),
        None => render(&world),
    };

    output::save_image(&image, &args.output)
}
