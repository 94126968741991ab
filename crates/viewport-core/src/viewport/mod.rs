pub mod action;
pub mod controller;
pub mod fit;
pub mod pan;
pub mod zoom;

pub use action::{apply_action, ImageAction, Steps};
pub use controller::ViewportController;
pub use fit::auto_fit;
pub use pan::{move_down, move_left, move_right, move_top, EdgeLimits};
pub use zoom::{calculate_zoom, zoom_in, zoom_out};
