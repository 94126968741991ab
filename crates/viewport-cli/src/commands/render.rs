use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use image::Rgba;
use viewport_core::io::image_io::save_png;
use viewport_core::render::render_view;
use viewport_core::settings::ViewportSettings;

#[derive(Args)]
pub struct RenderArgs {
    /// Configuration file (JSON)
    pub config: PathBuf,

    /// Background color for uncovered surface: "r,g,b,a" (e.g. "30,30,30,255")
    #[arg(long, default_value = "0,0,0,0")]
    pub background: String,

    /// Output file path
    #[arg(short, long, default_value = "view.png")]
    pub output: PathBuf,
}

pub fn run(args: &RenderArgs, settings: &ViewportSettings) -> Result<()> {
    let background = parse_rgba(&args.background)?;

    let Some(session) = super::open_session(&[&args.config], settings)? else {
        println!("Unsupported file type: {}", args.config.display());
        return Ok(());
    };
    let image = session.image().context("No image loaded")?;

    let surface = session.controller().surface();
    let view = render_view(image, &session.transform(), surface, background)?;
    save_png(&view, &args.output)?;
    println!("Rendered {} view to {}", surface, args.output.display());

    Ok(())
}

fn parse_rgba(s: &str) -> Result<Rgba<u8>> {
    let parts: Vec<u8> = s
        .split(',')
        .map(|p| p.trim().parse::<u8>())
        .collect::<std::result::Result<_, _>>()
        .context("Invalid background format (expected 'r,g,b,a')")?;
    if parts.len() != 4 {
        anyhow::bail!("Background requires exactly 4 values: r,g,b,a");
    }
    Ok(Rgba([parts[0], parts[1], parts[2], parts[3]]))
}
