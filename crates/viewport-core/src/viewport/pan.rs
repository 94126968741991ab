use crate::geometry::{Dimensions, Transform};

/// Edge predicates for one transform, evaluated before a step is applied.
///
/// Each flag is true when moving one more `step` toward that edge would
/// uncover empty surface, in which case the pan snaps flush instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeLimits {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl EdgeLimits {
    pub fn evaluate(
        transform: &Transform,
        image: Dimensions,
        surface: Dimensions,
        step: f64,
    ) -> Self {
        Self {
            top: is_top_limit(transform, step),
            bottom: is_bottom_limit(transform, image, surface, step),
            left: is_left_limit(transform, image, surface, step),
            right: is_right_limit(transform, step),
        }
    }

    /// True when at least one edge is at its limit.
    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }
}

pub fn is_top_limit(transform: &Transform, step: f64) -> bool {
    transform.y + step > 0.0
}

pub fn is_bottom_limit(
    transform: &Transform,
    image: Dimensions,
    surface: Dimensions,
    step: f64,
) -> bool {
    let (_, scaled_h) = transform.scaled_size(image);
    transform.y + scaled_h - step < surface.height as f64
}

pub fn is_left_limit(
    transform: &Transform,
    image: Dimensions,
    surface: Dimensions,
    step: f64,
) -> bool {
    let (scaled_w, _) = transform.scaled_size(image);
    transform.x + scaled_w - step < surface.width as f64
}

pub fn is_right_limit(transform: &Transform, step: f64) -> bool {
    transform.x + step > 0.0
}

/// Shift the image down by `step`, snapping its top edge flush with the surface.
pub fn move_top(transform: &Transform, step: f64) -> Transform {
    let y = if is_top_limit(transform, step) {
        0.0
    } else {
        transform.y + step
    };
    Transform { y, ..*transform }
}

/// Shift the image up by `step`, snapping its bottom edge flush with the surface.
pub fn move_down(
    transform: &Transform,
    image: Dimensions,
    surface: Dimensions,
    step: f64,
) -> Transform {
    let y = if is_bottom_limit(transform, image, surface, step) {
        let (_, scaled_h) = transform.scaled_size(image);
        surface.height as f64 - scaled_h
    } else {
        transform.y - step
    };
    Transform { y, ..*transform }
}

/// Shift the image left by `step`, snapping its right edge flush with the surface.
pub fn move_left(
    transform: &Transform,
    image: Dimensions,
    surface: Dimensions,
    step: f64,
) -> Transform {
    let x = if is_left_limit(transform, image, surface, step) {
        let (scaled_w, _) = transform.scaled_size(image);
        surface.width as f64 - scaled_w
    } else {
        transform.x - step
    };
    Transform { x, ..*transform }
}

/// Shift the image right by `step`, snapping its left edge flush with the surface.
pub fn move_right(transform: &Transform, step: f64) -> Transform {
    let x = if is_right_limit(transform, step) {
        0.0
    } else {
        transform.x + step
    };
    Transform { x, ..*transform }
}
