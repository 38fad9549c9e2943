use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use sphere_tracer::config::SceneConfig;
use sphere_tracer::ppm::write_ppm;
use sphere_tracer::render::render;

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn scene_config(args: &Args) -> anyhow::Result<SceneConfig> {
    let mut config = match &args.scene {
        Some(path) => SceneConfig::load(path).with_context(|| format!("loading scene {}", path.display()))?,
        None => SceneConfig::default(),
    };

    if let Some(width) = args.width {
        config.image.width = width;
    }
    if let Some(height) = args.height {
        config.image.height = height;
    }
    if let Some(samples) = args.samples_per_pixel {
        config.image.samples_per_pixel = samples;
    }
    if let Some(max_depth) = args.max_depth {
        config.image.max_depth = max_depth;
    }
    if let Some(seed) = args.seed {
        config.image.seed = seed;
    }

    return Ok(config);
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    let config = scene_config(&args)?;

    if args.dump_scene {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let scene = config.build().context("invalid scene")?;
    info!("Seed {}, max depth {}", scene.seed, scene.settings.max_depth);

    let mut rng = StdRng::seed_from_u64(scene.seed);
    let image = render(&scene.world, &scene.camera, &scene.settings, &mut rng);

    let mut w: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    write_ppm(&image, &mut w).context("writing image")?;

    if let Some(path) = &args.output {
        info!("Image saved as {}", path.display());
    }

    return Ok(());
}
