use crate::application::{Editor, set_uuid_seed};
use crate::messages::input_mapper::utility_types::input_keyboard::ModifierKeys;
use crate::messages::input_mapper::utility_types::input_mouse::{EditorMouseState, MouseKeys, ViewportBounds};
use crate::messages::prelude::*;
use crate::messages::tool::utility_types::ToolType;

/// A set of utility functions to make the writing of editor tests more declarative
pub struct EditorTestUtils {
	pub editor: Editor,
}

impl EditorTestUtils {
	pub fn create() -> Self {
		let _ = env_logger::builder().is_test(true).try_init();
		set_uuid_seed(0);

		let mut editor = Editor::new();
		editor.handle_message(Message::Init);
		editor.handle_message(InputPreprocessorMessage::BoundsOfViewport {
			bounds: ViewportBounds::from_slice(&[0., 0., 800., 600.]),
		});

		Self { editor }
	}

	pub fn select_tool(&mut self, tool_type: ToolType) {
		self.editor.handle_message(ToolMessage::ActivateTool { tool_type });
	}

	pub fn move_mouse(&mut self, x: f64, y: f64, modifier_keys: ModifierKeys) {
		let editor_mouse_state = EditorMouseState::from_editor_position(x, y);
		self.editor.handle_message(InputPreprocessorMessage::PointerMove { editor_mouse_state, modifier_keys });
	}

	pub fn lmb_down(&mut self, x: f64, y: f64, modifier_keys: ModifierKeys) {
		let mut editor_mouse_state = EditorMouseState::from_editor_position(x, y);
		editor_mouse_state.mouse_keys = MouseKeys::LEFT;
		self.editor.handle_message(InputPreprocessorMessage::PointerDown { editor_mouse_state, modifier_keys });
	}

	pub fn lmb_drag_to(&mut self, x: f64, y: f64, modifier_keys: ModifierKeys) {
		let mut editor_mouse_state = EditorMouseState::from_editor_position(x, y);
		editor_mouse_state.mouse_keys = MouseKeys::LEFT;
		self.editor.handle_message(InputPreprocessorMessage::PointerMove { editor_mouse_state, modifier_keys });
	}

	pub fn lmb_up(&mut self, x: f64, y: f64, modifier_keys: ModifierKeys) {
		let editor_mouse_state = EditorMouseState::from_editor_position(x, y);
		self.editor.handle_message(InputPreprocessorMessage::PointerUp { editor_mouse_state, modifier_keys });
	}

	pub fn click_tool(&mut self, tool_type: ToolType, x: f64, y: f64, modifier_keys: ModifierKeys) {
		self.select_tool(tool_type);

		self.move_mouse(x, y, modifier_keys);
		self.lmb_down(x, y, modifier_keys);
		self.lmb_up(x, y, modifier_keys);
	}

	pub fn drag_tool(&mut self, tool_type: ToolType, x1: f64, y1: f64, x2: f64, y2: f64, modifier_keys: ModifierKeys) {
		self.select_tool(tool_type);

		self.move_mouse(x1, y1, modifier_keys);
		self.lmb_down(x1, y1, modifier_keys);
		self.lmb_drag_to(x2, y2, modifier_keys);
		self.lmb_up(x2, y2, modifier_keys);
	}
}
