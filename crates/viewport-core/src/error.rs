use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid configuration document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings parse error: {0}")]
    Settings(#[from] toml::de::Error),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid transform: {0}")]
    InvalidTransform(String),

    #[error("No image has been loaded")]
    NotReady,

    #[error("Another load is already in progress")]
    LoadPending,
}

pub type Result<T> = std::result::Result<T, ViewportError>;
