use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewportError};

/// Pixel dimensions of an image or of the display surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Build dimensions, rejecting zero-sized extents.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ViewportError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Displayed size at the given uniform scale.
    pub fn scaled(&self, scale: f64) -> (f64, f64) {
        (self.width as f64 * scale, self.height as f64 * scale)
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Placement of an image on the surface.
///
/// `x`/`y` are the offset of the image's top-left corner from the surface's
/// top-left corner, in surface pixels. `scale` multiplies the intrinsic image
/// size to give its displayed size and must stay positive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform {
    pub fn new(x: f64, y: f64, scale: f64) -> Self {
        Self { x, y, scale }
    }

    /// Displayed width and height of `image` under this transform.
    pub fn scaled_size(&self, image: Dimensions) -> (f64, f64) {
        image.scaled(self.scale)
    }

    /// Surface coordinates of the displayed image's center.
    pub fn visual_center(&self, image: Dimensions) -> (f64, f64) {
        let (w, h) = self.scaled_size(image);
        (self.x + w / 2.0, self.y + h / 2.0)
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x={:.3} y={:.3} scale={:.5}", self.x, self.y, self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Dimensions::new(0, 10),
            Err(ViewportError::InvalidDimensions { width: 0, height: 10 })
        ));
        assert!(Dimensions::new(10, 0).is_err());
        assert!(Dimensions::new(1, 1).is_ok());
    }

    #[test]
    fn test_visual_center() {
        let image = Dimensions { width: 200, height: 100 };
        let t = Transform::new(-10.0, 5.0, 2.0);
        assert_eq!(t.visual_center(image), (190.0, 105.0));
    }
}
