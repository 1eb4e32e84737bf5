use crate::messages::document::utility_types::NavigationMode;

use glam::{DVec2, DVec3};
use maquette_scene::CoordinateSystem;

/// Everything captured when a view drag begins. All pointer motion during the drag is interpreted
/// relative to this state, so each move recomputes the view from scratch instead of accumulating.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportDrag {
	pub click_point: DVec2,
	/// The world position under the cursor at press time, on the editing plane.
	pub click_world: DVec3,
	pub old_coords: CoordinateSystem,
	pub old_camera_position: DVec3,
	pub old_rotation_center: DVec3,
	pub old_scale: f64,
	pub old_dist: f64,
	/// Control was held at press: zoom in the model modes, forward travel in the travel modes.
	pub zoom_or_travel: bool,
	/// The mode driving this drag (possibly the model fallback of the selected mode).
	pub active_mode: NavigationMode,
	/// The user-selected mode, restored when the drag ends.
	pub selected_mode: NavigationMode,
	/// A document transaction was opened for this drag because the viewport is bound to a scene camera.
	pub transaction_open: bool,
}
