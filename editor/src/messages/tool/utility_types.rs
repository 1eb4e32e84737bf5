use super::tool_messages::{box_tool, move_view_tool};
use crate::messages::input_mapper::utility_types::input_keyboard::{Key, KeysGroup, MouseMotion};
use crate::messages::prelude::*;

use serde::{Deserialize, Serialize};
use std::fmt;

pub struct ToolActionHandlerData<'a> {
	pub document: &'a DocumentMessageHandler,
	pub input: &'a InputPreprocessorMessageHandler,
}

pub trait ToolCommon: for<'a, 'b> MessageHandler<ToolMessage, &'b mut ToolActionHandlerData<'a>> + ToolTransition + ToolMetadata {}
impl<T> ToolCommon for T where T: for<'a, 'b> MessageHandler<ToolMessage, &'b mut ToolActionHandlerData<'a>> + ToolTransition + ToolMetadata {}

pub type Tool = dyn ToolCommon + Send + Sync;

/// The FSM (finite state machine) is a flowchart between different operating states that a specific tool might be in.
/// It is the central "core" logic area of each tool which is in charge of maintaining the state of the tool and responding to events coming from outside (like user input).
/// For example, a tool might be `Ready` or `Drawing` depending on if the user is idle or actively drawing with the mouse held down.
/// Every tool, which implements this trait, must implement the `transition()` function.
/// That is where new events are sent, and where the flowchart transition logic occurs to respond to events and end in a new state.
pub trait Fsm {
	/// The implementing tool must set this to a struct designed to store the internal values stored in the tool.
	/// For example, it might be used to store the starting location of a point when a drag began so the displacement distance can be calculated.
	type ToolData;

	/// Implementing this mandatory trait function lets a specific tool react accordingly (and potentially change its state or internal variables) upon receiving an event to do something.
	#[must_use]
	fn transition(self, message: ToolMessage, tool_data: &mut Self::ToolData, handler_data: &mut ToolActionHandlerData, responses: &mut VecDeque<Message>) -> Self;

	/// Implementing this trait function lets a specific tool provide a list of hints (user input actions presently available) to draw in the footer bar.
	fn update_hints(&self, responses: &mut VecDeque<Message>);
	/// Implementing this trait function lets a specific tool set the current mouse cursor icon.
	fn update_cursor(&self, responses: &mut VecDeque<Message>);

	/// If this message is a standard tool message, process it and return true. Standard tool messages are those which are common across every tool.
	fn standard_tool_messages(&self, message: &ToolMessage, responses: &mut VecDeque<Message>) -> bool {
		match message {
			ToolMessage::UpdateHints => {
				self.update_hints(responses);
				true
			}
			ToolMessage::UpdateCursor => {
				self.update_cursor(responses);
				true
			}
			_ => false,
		}
	}

	/// When an event makes the tool change or do something, it is processed here to perform a step (transition) on the tool's finite state machine (FSM).
	/// This function is called by the specific tool's message handler when the dispatcher routes a message to the active tool.
	fn process_event(&mut self, message: ToolMessage, tool_data: &mut Self::ToolData, handler_data: &mut ToolActionHandlerData, responses: &mut VecDeque<Message>, update_cursor_on_transition: bool)
	where
		Self: PartialEq + Sized + Copy,
	{
		// If this message is one of the standard tool messages, process it and exit early
		if self.standard_tool_messages(&message, responses) {
			return;
		}

		// Transition the tool
		let new_state = self.transition(message, tool_data, handler_data, responses);

		// Update state
		if *self != new_state {
			*self = new_state;
			self.update_hints(responses);
			if update_cursor_on_transition {
				self.update_cursor(responses);
			}
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct EventToMessageMap {
	pub document_dirty: Option<ToolMessage>,
	pub selection_changed: Option<ToolMessage>,
	pub tool_abort: Option<ToolMessage>,
}

pub trait ToolTransition {
	fn event_to_message_map(&self) -> EventToMessageMap;

	fn activate(&self, responses: &mut VecDeque<Message>) {
		let mut subscribe_message = |broadcast_to_tool_mapping: Option<ToolMessage>, on: BroadcastEvent| {
			if let Some(mapping) = broadcast_to_tool_mapping {
				responses.add(BroadcastMessage::SubscribeEvent {
					on,
					send: Box::new(mapping.into()),
				});
			};
		};

		let event_to_tool_map = self.event_to_message_map();
		subscribe_message(event_to_tool_map.document_dirty, BroadcastEvent::DocumentIsDirty);
		subscribe_message(event_to_tool_map.selection_changed, BroadcastEvent::SelectionChanged);
		subscribe_message(event_to_tool_map.tool_abort, BroadcastEvent::ToolAbort);
	}

	fn deactivate(&self, responses: &mut VecDeque<Message>) {
		let mut unsubscribe_message = |broadcast_to_tool_mapping: Option<ToolMessage>, on: BroadcastEvent| {
			if let Some(mapping) = broadcast_to_tool_mapping {
				responses.add(BroadcastMessage::UnsubscribeEvent {
					on,
					send: Box::new(mapping.into()),
				});
			};
		};

		let event_to_tool_map = self.event_to_message_map();
		unsubscribe_message(event_to_tool_map.document_dirty, BroadcastEvent::DocumentIsDirty);
		unsubscribe_message(event_to_tool_map.selection_changed, BroadcastEvent::SelectionChanged);
		unsubscribe_message(event_to_tool_map.tool_abort, BroadcastEvent::ToolAbort);
	}
}

pub trait ToolMetadata {
	fn icon_name(&self) -> String;
	fn tooltip(&self) -> String;
	fn tool_type(&self) -> ToolType;
}

pub struct ToolData {
	pub active_tool_type: ToolType,
	pub tools: HashMap<ToolType, Box<Tool>>,
}

impl fmt::Debug for ToolData {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ToolData").field("active_tool_type", &self.active_tool_type).field("tools", &"[…]").finish()
	}
}

impl ToolData {
	pub fn active_tool_mut(&mut self) -> &mut Box<Tool> {
		self.tools.get_mut(&self.active_tool_type).expect("The active tool is not initialized")
	}

	pub fn active_tool(&self) -> &Tool {
		self.tools.get(&self.active_tool_type).map(|tool| tool.as_ref()).expect("The active tool is not initialized")
	}
}

#[derive(Debug)]
pub struct ToolFsmState {
	pub tool_data: ToolData,
}

impl Default for ToolFsmState {
	fn default() -> Self {
		Self {
			tool_data: ToolData {
				active_tool_type: ToolType::MoveView,
				tools: list_tools().into_iter().map(|tool| (tool.tool_type(), tool)).collect(),
			},
		}
	}
}

impl ToolFsmState {
	pub fn new() -> Self {
		Self::default()
	}
}

#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolType {
	#[default]
	MoveView,
	Box,
}

/// All the tools in their conventional ordering.
fn list_tools() -> Vec<Box<Tool>> {
	vec![
		Box::<move_view_tool::MoveViewTool>::default(),
		Box::<box_tool::BoxTool>::default(),
	]
}

pub fn tool_message_to_tool_type(tool_message: &ToolMessage) -> ToolType {
	match tool_message {
		ToolMessage::BoxTool(_) => ToolType::Box,
		ToolMessage::MoveView(_) => ToolType::MoveView,
		_ => panic!("Conversion from ToolMessage to ToolType impossible because the given ToolMessage does not have a matching ToolType. Got: {tool_message:?}"),
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintData(pub Vec<HintGroup>);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintGroup(pub Vec<HintInfo>);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintInfo {
	/// A `KeysGroup` specifies all the keys pressed simultaneously to perform an action (like "Ctrl C" to copy).
	#[serde(rename = "keyGroups")]
	pub key_groups: Vec<KeysGroup>,
	/// An optional `MouseMotion` that can indicate the mouse action, like which mouse button is used and whether a drag occurs.
	/// No such icon is shown if `None` is given, and it can be combined with `key_groups` if desired.
	pub mouse: Option<MouseMotion>,
	/// The text describing what occurs with this input combination.
	pub label: String,
	/// Draws a prepended "+" symbol which indicates that this is a refinement upon a previous hint in the group.
	pub plus: bool,
}

impl HintInfo {
	pub fn keys(keys: impl IntoIterator<Item = Key>, label: impl Into<String>) -> Self {
		let keys: Vec<_> = keys.into_iter().collect();
		Self {
			key_groups: vec![KeysGroup(keys)],
			mouse: None,
			label: label.into(),
			plus: false,
		}
	}

	pub fn mouse(mouse_motion: MouseMotion, label: impl Into<String>) -> Self {
		Self {
			key_groups: vec![],
			mouse: Some(mouse_motion),
			label: label.into(),
			plus: false,
		}
	}

	pub fn keys_and_mouse(keys: impl IntoIterator<Item = Key>, mouse_motion: MouseMotion, label: impl Into<String>) -> Self {
		let keys: Vec<_> = keys.into_iter().collect();
		Self {
			key_groups: vec![KeysGroup(keys)],
			mouse: Some(mouse_motion),
			label: label.into(),
			plus: false,
		}
	}

	pub fn label(label: impl Into<String>) -> Self {
		Self {
			key_groups: vec![],
			mouse: None,
			label: label.into(),
			plus: false,
		}
	}

	pub fn prepend_plus(mut self) -> Self {
		self.plus = true;
		self
	}
}
