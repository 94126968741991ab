use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use viewport_core::settings::ViewportSettings;

#[derive(Args)]
pub struct SettingsArgs {
    /// Write settings to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save the active settings as TOML.
pub fn run(args: &SettingsArgs, settings: &ViewportSettings) -> Result<()> {
    let toml_str = toml::to_string_pretty(settings)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        println!("Settings saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
