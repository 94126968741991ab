use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_MOVE_STEP, DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH, DEFAULT_ZOOM_IN_FACTOR,
    DEFAULT_ZOOM_OUT_FACTOR,
};
use crate::error::{Result, ViewportError};
use crate::geometry::Dimensions;
use crate::viewport::Steps;

/// Tunable constants of a viewport session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportSettings {
    /// Fixed display surface size.
    #[serde(default = "default_surface")]
    pub surface: Dimensions,
    /// Pan distance in surface pixels.
    #[serde(default = "default_move_step")]
    pub move_step: f64,
    #[serde(default = "default_zoom_in_factor")]
    pub zoom_in_factor: f64,
    #[serde(default = "default_zoom_out_factor")]
    pub zoom_out_factor: f64,
}

fn default_surface() -> Dimensions {
    Dimensions {
        width: DEFAULT_SURFACE_WIDTH,
        height: DEFAULT_SURFACE_HEIGHT,
    }
}
fn default_move_step() -> f64 {
    DEFAULT_MOVE_STEP
}
fn default_zoom_in_factor() -> f64 {
    DEFAULT_ZOOM_IN_FACTOR
}
fn default_zoom_out_factor() -> f64 {
    DEFAULT_ZOOM_OUT_FACTOR
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            surface: default_surface(),
            move_step: DEFAULT_MOVE_STEP,
            zoom_in_factor: DEFAULT_ZOOM_IN_FACTOR,
            zoom_out_factor: DEFAULT_ZOOM_OUT_FACTOR,
        }
    }
}

impl ViewportSettings {
    /// Parse settings from TOML, filling missing fields with defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let settings: Self = toml::from_str(contents)?;
        settings.validated()
    }

    /// Read settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Action step sizes derived from these settings.
    pub fn steps(&self) -> Steps {
        Steps {
            move_step: self.move_step,
            zoom_in_factor: self.zoom_in_factor,
            zoom_out_factor: self.zoom_out_factor,
        }
    }

    fn validated(self) -> Result<Self> {
        Dimensions::new(self.surface.width, self.surface.height)?;
        if !(self.zoom_in_factor > 0.0 && self.zoom_out_factor > 0.0) {
            return Err(ViewportError::InvalidSettings(
                "zoom factors must be positive".into(),
            ));
        }
        if !(self.move_step > 0.0) {
            return Err(ViewportError::InvalidSettings(
                "move step must be positive".into(),
            ));
        }
        Ok(self)
    }
}
