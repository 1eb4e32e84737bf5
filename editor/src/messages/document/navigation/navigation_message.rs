use crate::messages::document::utility_types::NavigationMode;
use crate::messages::input_mapper::utility_types::input_keyboard::Key;
use crate::messages::prelude::*;

#[impl_message(Message, DocumentMessage, Navigation)]
#[derive(PartialEq, Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum NavigationMessage {
	/// Capture the pressed-time view state and start interpreting pointer motion as a view drag.
	///
	/// `prefer_model_navigation` is set when the drag is driven by the move-view tool with the
	/// primary button; travel modes then fall back to their model counterparts until the drag ends.
	BeginViewportDrag {
		prefer_model_navigation: bool,
	},
	EndViewportDrag {
		abort: bool,
	},
	PointerMove {
		constrain_axis: Key,
	},
	SetNavigationMode {
		mode: NavigationMode,
	},
	ViewportResized,
	WheelZoom,
}
