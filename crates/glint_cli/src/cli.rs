use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glint_core::RenderOptions;
use log::LevelFilter;

/// Log levels selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
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

/// Render a JSON scene file with the Glint ray tracer.
#[derive(Debug, Parser)]
#[command(name = "glint", version)]
pub struct Args {
    /// Scene description (JSON)
    pub scene: PathBuf,

    /// Output image; the format follows the extension
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Anti-aliasing grid size (N for N x N samples per pixel)
    #[arg(long)]
    pub aa: Option<u32>,

    /// Lens aperture radius; 0 disables depth of field
    #[arg(long)]
    pub aperture: Option<f32>,

    /// Distance to the plane in focus
    #[arg(long)]
    pub focal_length: Option<f32>,

    /// Seed for lens sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Logging level (RUST_LOG still applies per module)
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Apply command-line overrides on top of the scene's options.
    pub fn apply_overrides(&self, options: &mut RenderOptions) {
        if let Some(aa) = self.aa {
            options.aa_multiplier = aa;
        }
        if let Some(aperture) = self.aperture {
            options.aperture_radius = aperture;
        }
        if let Some(focal_length) = self.focal_length {
            options.focal_length = focal_length;
        }
        if let Some(seed) = self.seed {
            options.seed = seed;
        }
    }
}
