/// Builds a `KeyStates` bit set from a list of `Key` identifiers.
macro_rules! modifiers {
	($($m:ident),* $(,)?) => {{
		#[allow(unused_mut)]
		let mut state = KeyStates::new();
		$(
			state.set(Key::$m as usize);
		)*
		state
	}};
}

/// Constructs the `MappingEntry` list for one input binding.
///
/// `refresh_keys` adds extra entries so the same action is re-dispatched when one of those keys
/// goes down or up mid-gesture (used to live-update a drag when a modifier is pressed).
macro_rules! entry {
	($input:expr; $(modifiers=[$($modifier:ident),*],)? $(refresh_keys=[$($refresh:ident),* $(,)?],)? action_dispatch=$action:expr $(,)?) => {{
		#[allow(unused_mut)]
		let mut entries = vec![MappingEntry {
			action: $action.into(),
			input: $input,
			modifiers: modifiers!($($($modifier),*)?),
		}];
		$($(
			entries.push(MappingEntry {
				action: $action.into(),
				input: InputMapperMessage::KeyDown(Key::$refresh),
				modifiers: modifiers!(),
			});
			entries.push(MappingEntry {
				action: $action.into(),
				input: InputMapperMessage::KeyUp(Key::$refresh),
				modifiers: modifiers!(),
			});
		)*)?
		entries
	}};
}

/// Groups `entry!` lists into the per-input-event buckets of a `Mapping`.
macro_rules! mapping {
	($($entry:expr),* $(,)?) => {{
		let mut key_up = KeyMappingEntries::key_array();
		let mut key_down = KeyMappingEntries::key_array();
		let mut pointer_move = KeyMappingEntries::new();
		let mut wheel_scroll = KeyMappingEntries::new();
		$(
			for entry in $entry {
				let corresponding_list = match &entry.input {
					InputMapperMessage::KeyDown(key) => &mut key_down[*key as usize],
					InputMapperMessage::KeyUp(key) => &mut key_up[*key as usize],
					InputMapperMessage::PointerMove => &mut pointer_move,
					InputMapperMessage::WheelScroll => &mut wheel_scroll,
				};
				corresponding_list.push(entry);
			}
		)*
		(key_up, key_down, pointer_move, wheel_scroll)
	}};
}

pub(crate) use {entry, mapping, modifiers};
