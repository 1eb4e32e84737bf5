use super::tool_prelude::*;

#[derive(Default)]
pub struct MoveViewTool {
	fsm_state: MoveViewToolFsmState,
	tool_data: MoveViewToolData,
}

#[impl_message(Message, ToolMessage, MoveView)]
#[derive(PartialEq, Eq, Clone, Debug, Hash, serde::Serialize, serde::Deserialize)]
pub enum MoveViewToolMessage {
	// Standard messages
	Abort,

	// Tool-specific messages
	DragStart,
	DragStop,
	PointerMove {
		constrain_axis: Key,
	},
}

impl ToolMetadata for MoveViewTool {
	fn icon_name(&self) -> String {
		"GeneralMoveViewTool".into()
	}
	fn tooltip(&self) -> String {
		"Move View Tool".into()
	}
	fn tool_type(&self) -> ToolType {
		ToolType::MoveView
	}
}

impl<'a> MessageHandler<ToolMessage, &mut ToolActionHandlerData<'a>> for MoveViewTool {
	fn process_message(&mut self, message: ToolMessage, responses: &mut VecDeque<Message>, handler_data: &mut ToolActionHandlerData<'a>) {
		self.fsm_state.process_event(message, &mut self.tool_data, handler_data, responses, true);
	}

	fn actions(&self) -> ActionList {
		use MoveViewToolFsmState::*;

		match self.fsm_state {
			Ready => actions!(MoveViewToolMessageDiscriminant;
				DragStart,
			),
			Dragging => actions!(MoveViewToolMessageDiscriminant;
				PointerMove,
				DragStop,
				Abort,
			),
		}
	}
}

impl ToolTransition for MoveViewTool {
	fn event_to_message_map(&self) -> EventToMessageMap {
		EventToMessageMap {
			tool_abort: Some(MoveViewToolMessage::Abort.into()),
			..Default::default()
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum MoveViewToolFsmState {
	#[default]
	Ready,
	Dragging,
}

#[derive(Clone, Debug, Default)]
struct MoveViewToolData {}

impl Fsm for MoveViewToolFsmState {
	type ToolData = MoveViewToolData;

	fn transition(self, message: ToolMessage, _tool_data: &mut Self::ToolData, _handler_data: &mut ToolActionHandlerData, responses: &mut VecDeque<Message>) -> Self {
		let ToolMessage::MoveView(move_view) = message else {
			return self;
		};

		match move_view {
			MoveViewToolMessage::DragStart => {
				// The drag is driven by the tool's primary button, so travel modes fall back to
				// their model counterparts until the button is released
				responses.add_front(NavigationMessage::BeginViewportDrag { prefer_model_navigation: true });
				MoveViewToolFsmState::Dragging
			}
			MoveViewToolMessage::PointerMove { constrain_axis } => {
				responses.add_front(NavigationMessage::PointerMove { constrain_axis });
				self
			}
			MoveViewToolMessage::DragStop => {
				responses.add_front(NavigationMessage::EndViewportDrag { abort: false });
				MoveViewToolFsmState::Ready
			}
			MoveViewToolMessage::Abort => {
				responses.add_front(NavigationMessage::EndViewportDrag { abort: true });
				MoveViewToolFsmState::Ready
			}
		}
	}

	fn update_hints(&self, responses: &mut VecDeque<Message>) {
		let hint_data = match self {
			MoveViewToolFsmState::Ready => HintData(vec![
				HintGroup(vec![
					HintInfo::mouse(MouseMotion::LmbDrag, "Move View"),
					HintInfo::keys([Key::Control], "Zoom").prepend_plus(),
				]),
				HintGroup(vec![HintInfo::keys([Key::Shift], "Constrain to Axis")]),
			]),
			MoveViewToolFsmState::Dragging => HintData(vec![HintGroup(vec![HintInfo::keys([Key::Shift], "Constrain to Axis")])]),
		};

		responses.add(FrontendMessage::UpdateInputHints { hint_data });
	}

	fn update_cursor(&self, responses: &mut VecDeque<Message>) {
		let cursor = match *self {
			MoveViewToolFsmState::Ready => MouseCursorIcon::Grab,
			MoveViewToolFsmState::Dragging => MouseCursorIcon::Grabbing,
		};

		responses.add(FrontendMessage::UpdateMouseCursor { cursor });
	}
}
