use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageFormat, RgbaImage};

use crate::error::Result;
use crate::geometry::Dimensions;

use super::data_uri::DataUri;

/// Decode an encoded image (JPEG, PNG, GIF, ...) from memory.
pub fn decode_bytes(bytes: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}

/// Decode the image embedded in a base64 `data:` URI.
pub fn decode_data_uri(uri: &str) -> Result<DynamicImage> {
    let parsed = DataUri::parse(uri)?;
    decode_bytes(&parsed.data)
}

/// Encode an image as a PNG `data:` URI at its intrinsic resolution.
pub fn encode_data_uri(image: &DynamicImage) -> Result<String> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(DataUri::new("image/png", buf.into_inner()).to_string())
}

/// Intrinsic pixel size of a decoded image.
pub fn dimensions_of(image: &DynamicImage) -> Result<Dimensions> {
    let (w, h) = image.dimensions();
    Dimensions::new(w, h)
}

/// Save a rendered surface as 8-bit RGBA PNG.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
