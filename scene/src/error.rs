use crate::object::ObjectId;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
	#[error("no object with id {0:?} exists in the scene")]
	UnknownObject(ObjectId),
	#[error("an object with id {0:?} already exists in the scene")]
	DuplicateObject(ObjectId),
	#[error("object {0:?} is not a {1}")]
	WrongObjectKind(ObjectId, &'static str),
}
