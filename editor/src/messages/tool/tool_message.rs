use super::utility_types::ToolType;
use crate::messages::prelude::*;

#[impl_message(Message, Tool)]
#[derive(PartialEq, Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum ToolMessage {
	// Sub-messages
	#[child]
	BoxTool(BoxToolMessage),
	#[child]
	MoveView(MoveViewToolMessage),

	// Messages
	ActivateToolBox,
	ActivateToolMoveView,

	ActivateTool {
		tool_type: ToolType,
	},
	DeactivateTools,
	InitTools,
	UpdateCursor,
	UpdateHints,
}
