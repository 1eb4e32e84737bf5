use maquette_scene::ObjectId;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EditorError {
	#[error("no object with id {0:?} exists in the scene")]
	UnknownObject(ObjectId),
	#[error("object {0:?} is not a camera, so a viewport cannot look through it")]
	NotACamera(ObjectId),
}
