use maquette_scene::consts::DEFAULT_DIST_TO_PLANE;
use maquette_scene::{Camera, ObjectId, Scene};

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// How a viewport drag repositions the view.
///
/// The model modes move the camera around the scene (panning and zooming relative to the rotation
/// center); the travel modes move the camera through the scene in first person. The landscape
/// variants keep the motion referenced to the world's horizontal plane instead of the camera frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavigationMode {
	#[default]
	ModelSpace,
	ModelLandscape,
	TravelSpace,
	TravelLandscape,
}

impl NavigationMode {
	pub fn is_travel(self) -> bool {
		matches!(self, Self::TravelSpace | Self::TravelLandscape)
	}

	pub fn is_landscape(self) -> bool {
		matches!(self, Self::ModelLandscape | Self::TravelLandscape)
	}

	/// The model-navigation counterpart of this mode. Model modes map to themselves.
	pub fn model_equivalent(self) -> Self {
		match self {
			Self::TravelSpace => Self::ModelSpace,
			Self::TravelLandscape => Self::ModelLandscape,
			mode => mode,
		}
	}
}

/// The state of the editing viewport: the camera, how drags navigate it, and the point it orbits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
	pub camera: Camera,
	pub navigation_mode: NavigationMode,
	/// The world-space point the view orbits and zooms around.
	pub rotation_center: DVec3,
	/// Depth of the editing plane in front of the camera, in view-space units.
	pub dist_to_plane: f64,
	pub scale: f64,
	/// A camera object in the scene that this viewport looks through, if any.
	pub bound_camera: Option<ObjectId>,
}

impl Default for Viewport {
	fn default() -> Self {
		let camera = Camera::default();
		let scale = camera.scale();
		Self {
			camera,
			navigation_mode: NavigationMode::default(),
			rotation_center: DVec3::ZERO,
			dist_to_plane: DEFAULT_DIST_TO_PLANE,
			scale,
			bound_camera: None,
		}
	}
}

/// One undo step: the whole scene plus the selection active when it was captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
	pub scene: Scene,
	pub selected: Vec<ObjectId>,
}
