pub mod box_tool;
pub mod move_view_tool;

pub mod tool_prelude {
	pub use crate::messages::frontend::utility_types::MouseCursorIcon;
	pub use crate::messages::input_mapper::utility_types::input_keyboard::{Key, MouseMotion};
	pub use crate::messages::prelude::*;
	pub use crate::messages::tool::utility_types::{EventToMessageMap, Fsm, HintData, HintGroup, HintInfo, ToolActionHandlerData, ToolMetadata, ToolTransition, ToolType};

	pub use glam::{DVec2, DVec3};
}
