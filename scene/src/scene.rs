use crate::error::SceneError;
use crate::object::{ObjectId, ObjectInfo};

use serde::{Deserialize, Serialize};

/// The scene graph: an insertion-ordered list of objects with parent→child links by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
	objects: Vec<ObjectInfo>,
}

impl Scene {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.objects.len()
	}

	pub fn is_empty(&self) -> bool {
		self.objects.is_empty()
	}

	pub fn contains(&self, id: ObjectId) -> bool {
		self.objects.iter().any(|info| info.id == id)
	}

	pub fn object(&self, id: ObjectId) -> Option<&ObjectInfo> {
		self.objects.iter().find(|info| info.id == id)
	}

	pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut ObjectInfo> {
		self.objects.iter_mut().find(|info| info.id == id)
	}

	pub fn objects(&self) -> impl Iterator<Item = &ObjectInfo> {
		self.objects.iter()
	}

	pub fn add_object(&mut self, info: ObjectInfo) -> Result<(), SceneError> {
		if self.contains(info.id) {
			return Err(SceneError::DuplicateObject(info.id));
		}
		self.objects.push(info);
		Ok(())
	}

	/// Remove an object along with all of its transitive children, detaching it from any parent.
	pub fn remove_object(&mut self, id: ObjectId) -> Result<(), SceneError> {
		if !self.contains(id) {
			return Err(SceneError::UnknownObject(id));
		}

		let mut doomed = vec![id];
		let mut index = 0;
		while index < doomed.len() {
			if let Some(info) = self.object(doomed[index]) {
				doomed.extend(info.children.iter().copied());
			}
			index += 1;
		}

		self.objects.retain(|info| !doomed.contains(&info.id));
		for info in &mut self.objects {
			info.children.retain(|child| !doomed.contains(child));
		}

		Ok(())
	}
}
