mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use viewport_core::settings::ViewportSettings;

#[derive(Parser)]
#[command(name = "viewport", about = "Position, zoom and export photos on a fixed canvas")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Viewport settings file (TOML)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show image or configuration details and the resulting placement
    Info(commands::info::InfoArgs),
    /// Load a photo or configuration, apply actions and export
    Edit(commands::edit::EditArgs),
    /// Paint a saved configuration to a PNG
    Render(commands::render::RenderArgs),
    /// Print or save the default settings as TOML
    Settings(commands::settings::SettingsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = match cli.settings {
        Some(ref path) => ViewportSettings::load(path)
            .with_context(|| format!("Failed to read settings {}", path.display()))?,
        None => ViewportSettings::default(),
    };

    match &cli.command {
        Commands::Info(args) => commands::info::run(args, &settings),
        Commands::Edit(args) => commands::edit::run(args, &settings),
        Commands::Render(args) => commands::render::run(args, &settings),
        Commands::Settings(args) => commands::settings::run(args, &settings),
    }
}
