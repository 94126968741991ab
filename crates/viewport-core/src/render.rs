use image::{DynamicImage, Rgba, RgbaImage};
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::{Result, ViewportError};
use crate::geometry::{Dimensions, Transform};

/// Paint `image` onto a surface-sized canvas using `transform`.
///
/// Each surface pixel samples the nearest image pixel under it; pixels the
/// image does not cover get `background`.
pub fn render_view(
    image: &DynamicImage,
    transform: &Transform,
    surface: Dimensions,
    background: Rgba<u8>,
) -> Result<RgbaImage> {
    if !(transform.scale > 0.0) {
        return Err(ViewportError::InvalidTransform(format!(
            "cannot render with scale {}",
            transform.scale
        )));
    }

    let surface = Dimensions::new(surface.width, surface.height)?;

    let src = image.to_rgba8();
    let w = surface.width as usize;
    let h = surface.height as usize;
    let row_len = w * 4;
    let mut pixels = vec![0u8; row_len * h];

    let paint_row = |(row, out): (usize, &mut [u8])| {
        let iy = ((row as f64 + 0.5 - transform.y) / transform.scale).floor();
        for col in 0..w {
            let ix = ((col as f64 + 0.5 - transform.x) / transform.scale).floor();
            let px = sample(&src, ix, iy).unwrap_or(background);
            out[col * 4..col * 4 + 4].copy_from_slice(&px.0);
        }
    };

    if w * h >= PARALLEL_PIXEL_THRESHOLD {
        pixels.par_chunks_mut(row_len).enumerate().for_each(paint_row);
    } else {
        pixels.chunks_mut(row_len).enumerate().for_each(paint_row);
    }

    RgbaImage::from_raw(surface.width, surface.height, pixels).ok_or(
        ViewportError::InvalidDimensions {
            width: surface.width,
            height: surface.height,
        },
    )
}

fn sample(src: &RgbaImage, ix: f64, iy: f64) -> Option<Rgba<u8>> {
    if ix < 0.0 || iy < 0.0 || ix >= src.width() as f64 || iy >= src.height() as f64 {
        return None;
    }
    Some(*src.get_pixel(ix as u32, iy as u32))
}
