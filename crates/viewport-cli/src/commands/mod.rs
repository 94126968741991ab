pub mod edit;
pub mod info;
pub mod render;
pub mod settings;

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use viewport_core::session::Session;
use viewport_core::settings::ViewportSettings;

/// Read the first supported file and decode it into a fresh session.
///
/// Returns `None` when the first file is of an unsupported type.
pub fn open_session<P: AsRef<Path>>(
    files: &[P],
    settings: &ViewportSettings,
) -> Result<Option<Session>> {
    let mut session = Session::new(settings);
    let Some(first) = files.first() else {
        return Ok(None);
    };
    let first = first.as_ref();

    if files.len() > 1 {
        tracing::warn!(count = files.len(), "Only the first file is processed");
    }

    let accepted = session
        .begin_load(first)
        .with_context(|| format!("Failed to read {}", first.display()))?;
    if !accepted {
        return Ok(None);
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.set_message(format!("Decoding {}", first.display()));
    pb.enable_steady_tick(Duration::from_millis(80));

    let result = session.finish_load();
    pb.finish_and_clear();
    result.with_context(|| format!("Failed to decode {}", first.display()))?;

    Ok(Some(session))
}
