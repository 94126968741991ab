use std::path::Path;

use image::DynamicImage;
use tracing::{debug, info, warn};

use crate::config::{export_configuration, import_configuration, ConfigurationDocument};
use crate::error::{Result, ViewportError};
use crate::geometry::Transform;
use crate::io::image_io::{decode_bytes, dimensions_of};
use crate::io::media::MediaKind;
use crate::settings::ViewportSettings;
use crate::viewport::{ImageAction, ViewportController};

/// Input that has been read but not yet decoded.
#[derive(Clone, Debug)]
pub enum PendingLoad {
    /// Encoded image bytes awaiting decode and auto-fit.
    Image { kind: MediaKind, bytes: Vec<u8> },
    /// Parsed configuration whose embedded image awaits decode.
    Configuration(ConfigurationDocument),
}

/// Where the session is in the two-stage load.
#[derive(Clone, Debug, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Pending(PendingLoad),
}

/// Editing session: a controller plus the decoded image it positions.
///
/// Loading is split in two stages. [`Session::begin_load`] reads the input
/// and parks it; [`Session::finish_load`] decodes it and commits the new
/// image and transform together. Between the two the session is not ready
/// and actions are ignored.
#[derive(Debug)]
pub struct Session {
    controller: ViewportController,
    image: Option<DynamicImage>,
    state: LoadState,
}

impl Session {
    pub fn new(settings: &ViewportSettings) -> Self {
        Self {
            controller: ViewportController::with_steps(settings.surface, settings.steps()),
            image: None,
            state: LoadState::Idle,
        }
    }

    pub fn controller(&self) -> &ViewportController {
        &self.controller
    }

    pub fn image(&self) -> Option<&DynamicImage> {
        self.image.as_ref()
    }

    pub fn transform(&self) -> Transform {
        self.controller.transform()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// True when an image is committed and no load is in flight.
    pub fn is_ready(&self) -> bool {
        self.image.is_some() && matches!(self.state, LoadState::Idle)
    }

    /// Stage one for a file on disk. Returns `false` for unsupported files,
    /// which leave the session untouched.
    pub fn begin_load(&mut self, path: &Path) -> Result<bool> {
        let Some(kind) = MediaKind::from_path(path) else {
            debug!(path = %path.display(), "Ignoring unsupported input");
            return Ok(false);
        };
        self.ensure_idle()?;
        let bytes = std::fs::read(path)?;
        info!(path = %path.display(), mime = kind.mime(), "Input read");
        self.begin_bytes(kind, bytes)
    }

    /// Stage one for the first of several selected files; the rest are ignored.
    pub fn begin_load_first<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<bool> {
        match paths.first() {
            Some(path) => self.begin_load(path.as_ref()),
            None => Ok(false),
        }
    }

    /// Stage one for already-read content with a known kind.
    pub fn begin_bytes(&mut self, kind: MediaKind, bytes: Vec<u8>) -> Result<bool> {
        self.ensure_idle()?;
        let pending = if kind.is_image() {
            PendingLoad::Image { kind, bytes }
        } else {
            PendingLoad::Configuration(ConfigurationDocument::from_json_slice(&bytes)?)
        };
        self.state = LoadState::Pending(pending);
        Ok(true)
    }

    /// Stage one for a MIME-typed upload. Unknown types are ignored.
    pub fn begin_mime(&mut self, mime: &str, bytes: Vec<u8>) -> Result<bool> {
        match MediaKind::from_mime(mime) {
            Some(kind) => self.begin_bytes(kind, bytes),
            None => {
                debug!(mime, "Ignoring unsupported input type");
                Ok(false)
            }
        }
    }

    /// Stage two: decode the parked input and commit it.
    ///
    /// Returns `None` when nothing was pending. On failure the pending input
    /// is dropped and the committed image and transform are kept.
    pub fn finish_load(&mut self) -> Result<Option<Transform>> {
        let pending = match std::mem::take(&mut self.state) {
            LoadState::Idle => return Ok(None),
            LoadState::Pending(pending) => pending,
        };

        let (image, transform) = match pending {
            PendingLoad::Image { kind, bytes } => {
                let image = decode_bytes(&bytes)?;
                let dims = dimensions_of(&image)?;
                let transform = self.controller.load_image(dims);
                info!(mime = kind.mime(), %dims, %transform, "Image loaded");
                (image, transform)
            }
            PendingLoad::Configuration(document) => {
                let (image, transform) = import_configuration(&document)?;
                let dims = dimensions_of(&image)?;
                if document.surface() != self.controller.surface() {
                    warn!(
                        saved = %document.surface(),
                        current = %self.controller.surface(),
                        "Configuration was saved for a different surface size"
                    );
                }
                self.controller.restore(dims, transform);
                info!(%dims, %transform, "Configuration restored");
                (image, transform)
            }
        };

        self.image = Some(image);
        Ok(Some(transform))
    }

    /// Run both load stages for one file.
    pub fn load(&mut self, path: &Path) -> Result<Option<Transform>> {
        if self.begin_load(path)? {
            self.finish_load()
        } else {
            Ok(None)
        }
    }

    /// Apply an action. Ignored while a load is pending.
    pub fn apply(&mut self, action: ImageAction) -> Transform {
        if let LoadState::Pending(_) = self.state {
            debug!(%action, "Action ignored, load in progress");
            return self.controller.transform();
        }
        self.controller.apply(action)
    }

    /// Snapshot the committed image and transform.
    pub fn export(&self) -> Result<ConfigurationDocument> {
        let image = self.image.as_ref().ok_or(ViewportError::NotReady)?;
        export_configuration(image, &self.controller.transform(), self.controller.surface())
    }

    fn ensure_idle(&self) -> Result<()> {
        match self.state {
            LoadState::Idle => Ok(()),
            LoadState::Pending(_) => Err(ViewportError::LoadPending),
        }
    }
}
