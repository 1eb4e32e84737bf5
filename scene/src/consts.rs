/// Pixels per scene unit at the screen plane when the view is at its base zoom.
pub const BASE_VIEW_SCALE: f64 = 100.;

/// Distance from the eye to the screen plane, in view-space units.
pub const DEFAULT_DIST_TO_SCREEN: f64 = 20.;

/// Default depth of the editing plane that new objects are placed on.
pub const DEFAULT_DIST_TO_PLANE: f64 = 20.;
