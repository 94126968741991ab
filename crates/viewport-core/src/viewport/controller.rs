use tracing::debug;

use crate::geometry::{Dimensions, Transform};

use super::action::{apply_action, ImageAction, Steps};
use super::fit::auto_fit;

/// Owned viewport state: the fixed surface, the loaded image size and the
/// current transform.
///
/// Every mutation replaces the transform in a single call; callers repaint
/// afterwards using [`ViewportController::transform`].
#[derive(Clone, Debug)]
pub struct ViewportController {
    surface: Dimensions,
    image: Option<Dimensions>,
    transform: Transform,
    steps: Steps,
}

impl ViewportController {
    pub fn new(surface: Dimensions) -> Self {
        Self::with_steps(surface, Steps::default())
    }

    pub fn with_steps(surface: Dimensions, steps: Steps) -> Self {
        Self {
            surface,
            image: None,
            transform: Transform::default(),
            steps,
        }
    }

    pub fn surface(&self) -> Dimensions {
        self.surface
    }

    pub fn image(&self) -> Option<Dimensions> {
        self.image
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn steps(&self) -> Steps {
        self.steps
    }

    /// Replace the image and cover-fit it to the surface.
    pub fn load_image(&mut self, image: Dimensions) -> Transform {
        let transform = auto_fit(image, self.surface);
        debug!(%image, %transform, "Image fitted to surface");
        self.image = Some(image);
        self.transform = transform;
        transform
    }

    /// Replace the image and transform verbatim, without any clamping.
    pub fn restore(&mut self, image: Dimensions, transform: Transform) {
        self.image = Some(image);
        self.transform = transform;
    }

    /// Apply one action and return the resulting transform.
    ///
    /// Without a loaded image the state is left untouched.
    pub fn apply(&mut self, action: ImageAction) -> Transform {
        let Some(image) = self.image else {
            debug!(%action, "Action ignored, no image loaded");
            return self.transform;
        };
        let next = apply_action(action, &self.transform, image, self.surface, &self.steps);
        debug!(%action, from = %self.transform, to = %next, "Action applied");
        self.transform = next;
        next
    }

    pub fn zoom_in(&mut self) -> Transform {
        self.apply(ImageAction::ZoomIn)
    }

    pub fn zoom_out(&mut self) -> Transform {
        self.apply(ImageAction::ZoomOut)
    }

    pub fn move_top(&mut self) -> Transform {
        self.apply(ImageAction::Top)
    }

    pub fn move_down(&mut self) -> Transform {
        self.apply(ImageAction::Down)
    }

    pub fn move_left(&mut self) -> Transform {
        self.apply(ImageAction::Left)
    }

    pub fn move_right(&mut self) -> Transform {
        self.apply(ImageAction::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let c = ViewportController::new(Dimensions { width: 400, height: 300 });
        assert_eq!(c.transform(), Transform::new(0.0, 0.0, 1.0));
        assert!(c.image().is_none());
    }

    #[test]
    fn test_actions_without_image_are_ignored() {
        let mut c = ViewportController::new(Dimensions { width: 400, height: 300 });
        assert_eq!(c.zoom_in(), Transform::default());
        assert_eq!(c.move_down(), Transform::default());
    }
}
