use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use image::Rgba;
use viewport_core::io::image_io::save_png;
use viewport_core::render::render_view;
use viewport_core::settings::ViewportSettings;
use viewport_core::viewport::ImageAction;

use crate::summary::print_session_summary;

#[derive(Args)]
pub struct EditArgs {
    /// Photo or configuration files; only the first one is used
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Comma-separated actions: up, down, left, right, zoom-in, zoom-out
    #[arg(short, long)]
    pub actions: Option<String>,

    /// Export the resulting configuration (file or directory)
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Paint the resulting view to a PNG
    #[arg(long)]
    pub render: Option<PathBuf>,
}

pub fn run(args: &EditArgs, settings: &ViewportSettings) -> Result<()> {
    let actions = match args.actions {
        Some(ref list) => parse_actions(list)?,
        None => Vec::new(),
    };

    let Some(mut session) = super::open_session(&args.files, settings)? else {
        println!("Unsupported file type: {}", args.files[0].display());
        return Ok(());
    };

    for action in &actions {
        let t = session.apply(*action);
        println!("{:<10} {}", action.to_string(), t);
    }

    print_session_summary(&session, &args.files[0]);

    if let Some(ref target) = args.export {
        let written = session
            .export()?
            .save(target)
            .with_context(|| format!("Failed to export to {}", target.display()))?;
        println!("Configuration saved to {}", written.display());
    }

    if let Some(ref path) = args.render {
        let image = session.image().context("No image loaded")?;
        let view = render_view(
            image,
            &session.transform(),
            session.controller().surface(),
            Rgba([0, 0, 0, 0]),
        )?;
        save_png(&view, path)?;
        println!("Rendered view saved to {}", path.display());
    }

    Ok(())
}

fn parse_actions(list: &str) -> Result<Vec<ImageAction>> {
    list.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.parse::<ImageAction>().map_err(anyhow::Error::msg))
        .collect::<Result<Vec<_>>>()
        .context("Invalid action list (expected e.g. 'zoom-in,up,left')")
}
