use anyhow::{bail, Context, Result};
use clap::Parser;
use glint_core::loader::{load_scene, validate};
use glint_renderer::{render, ImageBuffer, Scene};

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting Glint");

    if args.width == 0 || args.height == 0 {
        bail!("image size must be non-zero, got {}x{}", args.width, args.height);
    }

    let mut description = load_scene(&args.scene)
        .with_context(|| format!("failed to load scene {:?}", args.scene))?;
    args.apply_overrides(&mut description.options);
    validate(&description).context("invalid render options")?;

    let scene = Scene::from_description(&description);

    let mut image = ImageBuffer::new(args.width, args.height);
    render(&scene, &mut image);

    image
        .save(&args.output)
        .with_context(|| format!("failed to save image to {:?}", args.output))?;
    log::info!("Saved to {:?}", args.output);

    Ok(())
}
