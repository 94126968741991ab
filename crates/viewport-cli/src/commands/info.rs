use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use viewport_core::settings::ViewportSettings;

use crate::summary::print_session_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Image (JPEG, PNG, GIF) or configuration (JSON) file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs, settings: &ViewportSettings) -> Result<()> {
    match super::open_session(&[&args.file], settings)? {
        Some(session) => print_session_summary(&session, &args.file),
        None => println!("Unsupported file type: {}", args.file.display()),
    }
    Ok(())
}
