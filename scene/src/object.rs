use crate::coordinate_system::CoordinateSystem;

use glam::DVec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

/// The geometry payload of a scene object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Object {
	/// A box spanning `size` in its local frame, centered on the frame origin.
	Box { size: DVec3 },
	/// A camera placed in the scene which a viewport can be bound to.
	Camera { fov: f64 },
}

impl Object {
	pub fn unit_box() -> Self {
		Self::Box { size: DVec3::ONE }
	}

	pub fn is_camera(&self) -> bool {
		matches!(self, Self::Camera { .. })
	}
}

/// An object placed in the scene: geometry, a frame, and child links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectInfo {
	pub id: ObjectId,
	pub name: String,
	pub object: Object,
	pub coords: CoordinateSystem,
	pub children: Vec<ObjectId>,
}

impl ObjectInfo {
	pub fn new(id: ObjectId, name: impl Into<String>, object: Object, coords: CoordinateSystem) -> Self {
		Self {
			id,
			name: name.into(),
			object,
			coords,
			children: Vec::new(),
		}
	}
}
