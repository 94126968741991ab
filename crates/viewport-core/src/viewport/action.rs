use std::fmt;
use std::str::FromStr;

use crate::consts::{DEFAULT_MOVE_STEP, DEFAULT_ZOOM_IN_FACTOR, DEFAULT_ZOOM_OUT_FACTOR};
use crate::geometry::{Dimensions, Transform};

use super::pan::{move_down, move_left, move_right, move_top};
use super::zoom::{zoom_in, zoom_out};

/// Discrete edit requested by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageAction {
    Top,
    Down,
    Left,
    Right,
    ZoomIn,
    ZoomOut,
}

impl fmt::Display for ImageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "Top"),
            Self::Down => write!(f, "Down"),
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
            Self::ZoomIn => write!(f, "Zoom In"),
            Self::ZoomOut => write!(f, "Zoom Out"),
        }
    }
}

impl FromStr for ImageAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" | "up" => Ok(Self::Top),
            "down" | "bottom" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "zoom-in" | "in" | "+" => Ok(Self::ZoomIn),
            "zoom-out" | "out" | "-" => Ok(Self::ZoomOut),
            other => Err(format!("unknown action '{other}'")),
        }
    }
}

/// Step sizes used by the six action rules.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Steps {
    pub move_step: f64,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
}

impl Default for Steps {
    fn default() -> Self {
        Self {
            move_step: DEFAULT_MOVE_STEP,
            zoom_in_factor: DEFAULT_ZOOM_IN_FACTOR,
            zoom_out_factor: DEFAULT_ZOOM_OUT_FACTOR,
        }
    }
}

/// Compute the transform that results from applying `action`.
pub fn apply_action(
    action: ImageAction,
    transform: &Transform,
    image: Dimensions,
    surface: Dimensions,
    steps: &Steps,
) -> Transform {
    match action {
        ImageAction::ZoomIn => zoom_in(transform, image, steps.zoom_in_factor),
        ImageAction::ZoomOut => zoom_out(
            transform,
            image,
            surface,
            steps.zoom_out_factor,
            steps.move_step,
        ),
        ImageAction::Top => move_top(transform, steps.move_step),
        ImageAction::Down => move_down(transform, image, surface, steps.move_step),
        ImageAction::Left => move_left(transform, image, surface, steps.move_step),
        ImageAction::Right => move_right(transform, steps.move_step),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("up".parse::<ImageAction>(), Ok(ImageAction::Top));
        assert_eq!("Bottom".parse::<ImageAction>(), Ok(ImageAction::Down));
        assert_eq!(" zoom-in ".parse::<ImageAction>(), Ok(ImageAction::ZoomIn));
        assert_eq!("-".parse::<ImageAction>(), Ok(ImageAction::ZoomOut));
        assert!("rotate".parse::<ImageAction>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ImageAction::ZoomOut), "Zoom Out");
        assert_eq!(format!("{}", ImageAction::Left), "Left");
    }

    #[test]
    fn test_pan_touches_single_axis() {
        let image = Dimensions { width: 700, height: 700 };
        let surface = Dimensions { width: 500, height: 350 };
        let start = Transform::new(-60.0, -60.0, 1.0);
        let steps = Steps::default();

        let t = apply_action(ImageAction::Top, &start, image, surface, &steps);
        assert_eq!((t.x, t.scale), (start.x, start.scale));
        let t = apply_action(ImageAction::Left, &start, image, surface, &steps);
        assert_eq!((t.y, t.scale), (start.y, start.scale));
    }
}
