use crate::messages::input_mapper::utility_types::input_keyboard::{Key, KeyStates};
use crate::messages::input_mapper::utility_types::macros::*;
use crate::messages::input_mapper::utility_types::misc::{KeyMappingEntries, Mapping, MappingEntry};
use crate::messages::prelude::*;

pub fn default_mapping() -> Mapping {
	use InputMapperMessage::*;
	use Key::*;

	// NOTICE:
	// If a new mapping you added here isn't working (and perhaps another lower-precedence one is instead), make sure to advertise
	// it as an available action in the respective message handler file (such as the bottom of `document_message_handler.rs`).

	let mappings = mapping![
		// BoxToolMessage
		entry!(KeyDown(Lmb); action_dispatch=BoxToolMessage::DragStart),
		entry!(KeyUp(Lmb); action_dispatch=BoxToolMessage::DragStop),
		entry!(KeyDown(Rmb); action_dispatch=BoxToolMessage::Abort),
		entry!(KeyDown(Escape); action_dispatch=BoxToolMessage::Abort),
		entry!(PointerMove; refresh_keys=[Shift], action_dispatch=BoxToolMessage::Resize { constrain_square: Shift }),
		//
		// MoveViewToolMessage
		entry!(KeyDown(Lmb); action_dispatch=MoveViewToolMessage::DragStart),
		entry!(KeyUp(Lmb); action_dispatch=MoveViewToolMessage::DragStop),
		entry!(KeyDown(Escape); action_dispatch=MoveViewToolMessage::Abort),
		entry!(PointerMove; refresh_keys=[Shift], action_dispatch=MoveViewToolMessage::PointerMove { constrain_axis: Shift }),
		//
		// ToolMessage
		entry!(KeyDown(KeyB); action_dispatch=ToolMessage::ActivateToolBox),
		entry!(KeyDown(KeyM); action_dispatch=ToolMessage::ActivateToolMoveView),
		//
		// DocumentMessage
		entry!(KeyDown(KeyZ); modifiers=[Control, Shift], action_dispatch=DocumentMessage::Redo),
		entry!(KeyDown(KeyZ); modifiers=[Control], action_dispatch=DocumentMessage::Undo),
		//
		// NavigationMessage
		entry!(WheelScroll; action_dispatch=NavigationMessage::WheelZoom),
		//
		// DebugMessage
		entry!(KeyDown(KeyT); modifiers=[Alt], action_dispatch=DebugMessage::ToggleTraceLogs),
		entry!(KeyDown(Digit0); modifiers=[Alt], action_dispatch=DebugMessage::MessageOff),
		entry!(KeyDown(Digit1); modifiers=[Alt], action_dispatch=DebugMessage::MessageNames),
		entry!(KeyDown(Digit2); modifiers=[Alt], action_dispatch=DebugMessage::MessageContents),
	];
	let (mut key_up, mut key_down, mut pointer_move, mut wheel_scroll) = mappings;

	// Entries requiring more held-down modifiers take precedence over less specific variants of the same binding
	let sort = |list: &mut KeyMappingEntries| list.0.sort_by(|u, v| v.modifiers.ones().cmp(&u.modifiers.ones()));
	for list in [&mut key_up, &mut key_down] {
		for sublist in list {
			sort(sublist);
		}
	}
	sort(&mut pointer_move);
	sort(&mut wheel_scroll);

	Mapping {
		key_up,
		key_down,
		pointer_move,
		wheel_scroll,
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn more_specific_modifier_combinations_come_first() {
		let mapping = default_mapping();

		let key_z = &mapping.key_down[Key::KeyZ as usize].0;
		assert!(key_z.len() >= 2);
		assert!(key_z.windows(2).all(|pair| pair[0].modifiers.ones() >= pair[1].modifiers.ones()));
	}

	#[test]
	fn bindings_only_match_advertised_actions() {
		let mapping = default_mapping();
		let mut keyboard = KeyStates::new();
		keyboard.set(Key::Control as usize);

		let undo_available = actions!(DocumentMessageDiscriminant; Undo);
		let matched = mapping.match_input_message(InputMapperMessage::KeyDown(Key::KeyZ), &keyboard, undo_available);
		assert_eq!(matched, Some(DocumentMessage::Undo.into()));

		let nothing_available = Vec::new();
		let matched = mapping.match_input_message(InputMapperMessage::KeyDown(Key::KeyZ), &keyboard, nothing_available);
		assert_eq!(matched, None);
	}

	#[test]
	fn modifier_gated_binding_requires_its_modifier() {
		let mapping = default_mapping();
		let keyboard = KeyStates::new();

		let undo_available = actions!(DocumentMessageDiscriminant; Undo);
		let matched = mapping.match_input_message(InputMapperMessage::KeyDown(Key::KeyZ), &keyboard, undo_available);
		assert_eq!(matched, None);
	}

	#[test]
	fn refresh_keys_remap_modifier_changes_to_the_pointer_action() {
		let mapping = default_mapping();
		let keyboard = KeyStates::new();

		let resize_available = actions!(BoxToolMessageDiscriminant; Resize);
		let matched = mapping.match_input_message(InputMapperMessage::KeyDown(Key::Shift), &keyboard, resize_available);
		assert_eq!(
			matched,
			Some(BoxToolMessage::Resize { constrain_square: Key::Shift }.into())
		);
	}
}
