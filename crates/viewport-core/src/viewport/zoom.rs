use tracing::debug;

use crate::geometry::{Dimensions, Transform};

use super::pan::EdgeLimits;

/// Multiply the scale by `factor`, keeping the image's visual center fixed.
pub fn calculate_zoom(transform: &Transform, image: Dimensions, factor: f64) -> Transform {
    let (cur_w, cur_h) = transform.scaled_size(image);
    let new_w = cur_w * factor;
    let new_h = cur_h * factor;

    let x_offset = (new_w - cur_w) / 2.0;
    let y_offset = (new_h - cur_h) / 2.0;

    Transform {
        x: transform.x - x_offset,
        y: transform.y - y_offset,
        scale: transform.scale * factor,
    }
}

/// Grow the image around its center. Always applies.
pub fn zoom_in(transform: &Transform, image: Dimensions, factor: f64) -> Transform {
    calculate_zoom(transform, image, factor)
}

/// Shrink the image around its center.
///
/// Refused (returns the input unchanged) while any edge is at its pan limit
/// for `step`. The limits are checked at the current position, not at the
/// position the zoom would produce.
pub fn zoom_out(
    transform: &Transform,
    image: Dimensions,
    surface: Dimensions,
    factor: f64,
    step: f64,
) -> Transform {
    let limits = EdgeLimits::evaluate(transform, image, surface, step);
    if limits.any() {
        debug!(?limits, "Zoom out refused at edge limit");
        return *transform;
    }
    calculate_zoom(transform, image, factor)
}
