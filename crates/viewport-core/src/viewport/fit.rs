use crate::geometry::{Dimensions, Transform};

/// Scale `image` just enough to cover `surface` in both axes and center it.
pub fn auto_fit(image: Dimensions, surface: Dimensions) -> Transform {
    let surface_w = surface.width as f64;
    let surface_h = surface.height as f64;

    let scale = (surface_w / image.width as f64).max(surface_h / image.height as f64);
    let (scaled_w, scaled_h) = image.scaled(scale);

    Transform {
        x: surface_w / 2.0 - scaled_w / 2.0,
        y: surface_h / 2.0 - scaled_h / 2.0,
        scale,
    }
}
