use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "sphere_tracer")]
#[command(about = "Renders spheres lit by a point light to a plain-text PPM")]
pub struct Args {
    /// JSON scene description; the built-in scene is used when omitted
    pub scene: Option<PathBuf>,

    /// Output file; the image is written to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of samples per pixel
    #[arg(long, short = 's')]
    pub samples_per_pixel: Option<u32>,

    /// Maximum number of bounces per camera ray
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Seed for the random number generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the scene description as JSON and exit
    #[arg(long)]
    pub dump_scene: bool,
}
