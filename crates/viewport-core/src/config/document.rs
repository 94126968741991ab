use std::path::{Path, PathBuf};

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::consts::CONFIGURATION_FILE_NAME;
use crate::error::{Result, ViewportError};
use crate::geometry::{Dimensions, Transform};
use crate::io::image_io::{decode_data_uri, dimensions_of, encode_data_uri};

/// Exported snapshot of a session: surface size, embedded image and placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationDocument {
    pub canvas: CanvasRecord,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasRecord {
    pub width: u32,
    pub height: u32,
    pub photo: PhotoRecord,
}

/// Placement of the embedded photo. `width`/`height` are the displayed
/// (scaled) size, not the intrinsic one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub id: String,
    pub src: String,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

impl ConfigurationDocument {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_slice(json: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(json)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Write the document. A directory target gets the default file name.
    /// Returns the path actually written.
    pub fn save(&self, target: &Path) -> Result<PathBuf> {
        let path = if target.is_dir() {
            target.join(CONFIGURATION_FILE_NAME)
        } else {
            target.to_path_buf()
        };
        std::fs::write(&path, self.to_json_string()?)?;
        info!(path = %path.display(), "Configuration saved");
        Ok(path)
    }

    pub fn surface(&self) -> Dimensions {
        Dimensions {
            width: self.canvas.width,
            height: self.canvas.height,
        }
    }
}

/// Build a configuration document for `image` placed by `transform`.
///
/// The image is embedded as a PNG data URI at its intrinsic resolution.
pub fn export_configuration(
    image: &DynamicImage,
    transform: &Transform,
    surface: Dimensions,
) -> Result<ConfigurationDocument> {
    let natural = dimensions_of(image)?;
    let (width, height) = transform.scaled_size(natural);

    Ok(ConfigurationDocument {
        canvas: CanvasRecord {
            width: surface.width,
            height: surface.height,
            photo: PhotoRecord {
                id: CONFIGURATION_FILE_NAME.to_string(),
                src: encode_data_uri(image)?,
                width,
                height,
                x: transform.x,
                y: transform.y,
            },
        },
    })
}

/// Rebuild the transform of a saved photo once its intrinsic size is known.
///
/// Scale is not stored, so it is re-derived from the saved display size.
pub fn restore_transform(photo: &PhotoRecord, natural: Dimensions) -> Transform {
    let scale = (photo.width / natural.width as f64).max(photo.height / natural.height as f64);
    Transform {
        x: photo.x,
        y: photo.y,
        scale,
    }
}

/// Decode the embedded photo and recover its transform.
pub fn import_configuration(
    document: &ConfigurationDocument,
) -> Result<(DynamicImage, Transform)> {
    let photo = &document.canvas.photo;
    let image = decode_data_uri(&photo.src)?;
    let natural = dimensions_of(&image)?;
    let transform = restore_transform(photo, natural);
    if !(transform.scale > 0.0) {
        warn!(%transform, "Restored configuration has a non-positive scale");
        return Err(ViewportError::InvalidTransform(format!(
            "restored scale {} is not positive",
            transform.scale
        )));
    }
    Ok((image, transform))
}
