pub mod app;
pub mod scene;
pub mod theme;
pub mod view;

/// Radius of the classic SVG wheel; sizes below are in its units and get
/// scaled to the actual surface.
pub const REFERENCE_RADIUS: f64 = 180.0;
pub const LABEL_FONT_SIZE: f64 = 12.0;
pub const SYMBOL_FONT_SIZE: f64 = 20.0;
pub const MARKER_SIZE: f64 = 15.0;

/// Duration of the post-release glide to the snapped rotation.
pub const SNAP_ANIMATION_MS: f64 = 300.0;
