use crate::messages::prelude::*;

use glam::DVec3;
use maquette_scene::ObjectId;

#[impl_message(Message, Document)]
#[derive(PartialEq, Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum DocumentMessage {
	// Sub-messages
	#[child]
	Navigation(NavigationMessage),

	// Messages
	AbortTransaction,
	AddBox {
		id: ObjectId,
	},
	BindViewportCamera {
		camera: Option<ObjectId>,
	},
	CommitTransaction,
	Redo,
	ResizeBox {
		id: ObjectId,
		size: DVec3,
	},
	SetObjectCoords {
		id: ObjectId,
		origin: DVec3,
		z_direction: DVec3,
		up_direction: DVec3,
	},
	SetSelection {
		objects: Vec<ObjectId>,
	},
	StartTransaction,
	Undo,
}
