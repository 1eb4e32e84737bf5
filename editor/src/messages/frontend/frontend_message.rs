use super::utility_types::MouseCursorIcon;
use crate::messages::prelude::*;
use crate::messages::tool::utility_types::{HintData, ToolType};

use maquette_scene::ObjectId;

#[impl_message(Message, Frontend)]
#[derive(PartialEq, Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum FrontendMessage {
	RefreshViewport,
	UpdateActiveTool {
		tool: ToolType,
	},
	UpdateDocumentDirtyState {
		dirty: bool,
	},
	UpdateInputHints {
		#[serde(rename = "hintData")]
		hint_data: HintData,
	},
	UpdateMouseCursor {
		cursor: MouseCursorIcon,
	},
	UpdateSelection {
		objects: Vec<ObjectId>,
	},
}
