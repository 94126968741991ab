/// Multiplicative step applied by a single zoom-in action.
pub const DEFAULT_ZOOM_IN_FACTOR: f64 = 1.1;

/// Multiplicative step applied by a single zoom-out action.
pub const DEFAULT_ZOOM_OUT_FACTOR: f64 = 0.9;

/// Distance, in surface pixels, covered by a single pan action.
pub const DEFAULT_MOVE_STEP: f64 = 10.0;

/// Default display surface width in pixels.
pub const DEFAULT_SURFACE_WIDTH: u32 = 500;

/// Default display surface height in pixels.
pub const DEFAULT_SURFACE_HEIGHT: u32 = 350;

/// File name attached to exported configuration documents.
pub const CONFIGURATION_FILE_NAME: &str = "image-configuration.json";

/// Minimum pixel count (w*h) of a rendered surface to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;
