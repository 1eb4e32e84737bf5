use super::utility_types::{ToolActionHandlerData, ToolFsmState, ToolType, tool_message_to_tool_type};
use crate::messages::prelude::*;

#[derive(Debug, Default)]
pub struct ToolMessageHandler {
	pub tool_state: ToolFsmState,
}

impl<'a> MessageHandler<ToolMessage, (&'a DocumentMessageHandler, &'a InputPreprocessorMessageHandler)> for ToolMessageHandler {
	fn process_message(&mut self, message: ToolMessage, responses: &mut VecDeque<Message>, (document, input): (&'a DocumentMessageHandler, &'a InputPreprocessorMessageHandler)) {
		match message {
			ToolMessage::ActivateToolMoveView => responses.add_front(ToolMessage::ActivateTool { tool_type: ToolType::MoveView }),
			ToolMessage::ActivateToolBox => responses.add_front(ToolMessage::ActivateTool { tool_type: ToolType::Box }),

			ToolMessage::ActivateTool { tool_type } => {
				let tool_data = &mut self.tool_state.tool_data;
				let old_tool = tool_data.active_tool_type;

				// Do nothing if switching to the same tool
				if tool_type == old_tool {
					return;
				}

				// Send the old and new tools a transition to their FSM Abort states
				let mut send_abort_to_tool = |tool_type, update_hints_and_cursor: bool| {
					if let Some(tool) = tool_data.tools.get_mut(&tool_type) {
						let mut data = ToolActionHandlerData { document, input };
						if let Some(tool_abort_message) = tool.event_to_message_map().tool_abort {
							tool.process_message(tool_abort_message, responses, &mut data);
						}

						if update_hints_and_cursor {
							tool.process_message(ToolMessage::UpdateHints, responses, &mut data);
							tool.process_message(ToolMessage::UpdateCursor, responses, &mut data);
						}
					}
				};
				send_abort_to_tool(tool_type, true);
				send_abort_to_tool(old_tool, false);

				// Unsubscribe the old tool from the broadcaster
				tool_data.tools.get(&old_tool).unwrap().deactivate(responses);

				// Store the new active tool
				tool_data.active_tool_type = tool_type;

				// Subscribe the new tool
				tool_data.tools.get(&tool_type).unwrap().activate(responses);

				// Ensure the active tool's knowledge of the selection is up to date
				responses.add(BroadcastEvent::SelectionChanged);

				// Notify the frontend about the new active tool to be displayed
				responses.add(FrontendMessage::UpdateActiveTool { tool: tool_type });
			}
			ToolMessage::DeactivateTools => {
				let tool_data = &self.tool_state.tool_data;
				tool_data.tools.get(&tool_data.active_tool_type).unwrap().deactivate(responses);
			}
			ToolMessage::InitTools => {
				let tool_data = &mut self.tool_state.tool_data;
				let active_tool = tool_data.active_tool_type;

				// Subscribe the initial tool to broadcast messages
				tool_data.tools.get(&active_tool).unwrap().activate(responses);

				// Notify the frontend about the initial active tool
				responses.add(FrontendMessage::UpdateActiveTool { tool: active_tool });

				// Set initial hints and cursor
				let mut data = ToolActionHandlerData { document, input };
				tool_data.active_tool_mut().process_message(ToolMessage::UpdateHints, responses, &mut data);
				tool_data.active_tool_mut().process_message(ToolMessage::UpdateCursor, responses, &mut data);
			}

			// Sub-messages
			tool_message => {
				let tool_type = match &tool_message {
					ToolMessage::UpdateCursor | ToolMessage::UpdateHints => self.tool_state.tool_data.active_tool_type,
					tool_message => tool_message_to_tool_type(tool_message),
				};
				let tool_data = &mut self.tool_state.tool_data;

				// Messages are only routed to the active tool
				if tool_type == tool_data.active_tool_type {
					if let Some(tool) = tool_data.tools.get_mut(&tool_type) {
						let mut data = ToolActionHandlerData { document, input };
						tool.process_message(tool_message, responses, &mut data);
					}
				}
			}
		}
	}

	fn actions(&self) -> ActionList {
		let mut list = actions!(ToolMessageDiscriminant;
			ActivateToolMoveView,
			ActivateToolBox,
		);
		list.extend(self.tool_state.tool_data.active_tool().actions());

		list
	}
}
