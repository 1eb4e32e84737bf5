// VIEWPORT
/// Zoom factor applied per unit of normalized scroll wheel motion.
pub const VIEWPORT_ZOOM_WHEEL_RATE: f64 = (1. / 600.) * 3.;
/// Per-pixel zoom factor for vertical zoom drags.
pub const VIEWPORT_ZOOM_DRAG_RATE: f64 = 1.01;
pub const VIEWPORT_ZOOM_SCALE_MIN: f64 = 0.000_000_1;
pub const VIEWPORT_ZOOM_SCALE_MAX: f64 = 10_000.;

// NAVIGATION
/// Forward travel distance per pixel of vertical drag, scaled by the view depth.
pub const TRAVEL_FORWARD_RATE: f64 = 0.04;
/// Vertical travel distance per pixel of vertical drag, scaled by the view depth.
pub const TRAVEL_VERTICAL_RATE: f64 = 0.01;

// DOCUMENT
pub const MAX_UNDO_HISTORY_LEN: usize = 100;
