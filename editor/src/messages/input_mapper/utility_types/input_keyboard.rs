use crate::messages::prelude::*;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
	#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
	#[repr(transparent)]
	pub struct ModifierKeys: u8 {
		const SHIFT   = 0b0000_0001;
		const ALT     = 0b0000_0010;
		const CONTROL = 0b0000_0100;
	}
}

// Named after the JS `KeyboardEvent.code` values: <https://www.w3.org/TR/uievents-code/>
#[impl_message(Message, InputMapperMessage, KeyDown)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
	// Writing system keys
	Digit0,
	Digit1,
	Digit2,
	Digit3,
	Digit4,
	Digit5,
	Digit6,
	Digit7,
	Digit8,
	Digit9,
	//
	KeyA,
	KeyB,
	KeyC,
	KeyD,
	KeyE,
	KeyF,
	KeyG,
	KeyH,
	KeyI,
	KeyJ,
	KeyK,
	KeyL,
	KeyM,
	KeyN,
	KeyO,
	KeyP,
	KeyQ,
	KeyR,
	KeyS,
	KeyT,
	KeyU,
	KeyV,
	KeyW,
	KeyX,
	KeyY,
	KeyZ,

	// Functional keys
	Alt,
	Backspace,
	Control,
	Delete,
	Enter,
	Escape,
	Shift,
	Space,
	Tab,

	// Arrow pad keys
	ArrowDown,
	ArrowLeft,
	ArrowRight,
	ArrowUp,

	// Unidentified keys
	Unidentified,

	// Virtual keys which aren't part of the W3C spec
	Lmb,
	Rmb,
	Mmb,

	// This has to be the last element in the enum
	NumKeys,
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let key_name = format!("{self:?}");

		const DIGIT_PREFIX: &str = "Digit";
		if key_name.len() == DIGIT_PREFIX.len() + 1 && key_name.starts_with(DIGIT_PREFIX) {
			return write!(f, "{}", &key_name[DIGIT_PREFIX.len()..]);
		}
		const KEY_PREFIX: &str = "Key";
		if key_name.len() == KEY_PREFIX.len() + 1 && key_name.starts_with(KEY_PREFIX) {
			return write!(f, "{}", &key_name[KEY_PREFIX.len()..]);
		}

		let name = match self {
			Self::Control => "Ctrl",
			Self::Delete => "Del",
			Self::Escape => "Esc",
			Self::ArrowDown => "↓",
			Self::ArrowLeft => "←",
			Self::ArrowRight => "→",
			Self::ArrowUp => "↑",
			_ => key_name.as_str(),
		};

		write!(f, "{name}")
	}
}

pub const NUMBER_OF_KEYS: usize = Key::NumKeys as usize;
const _: () = assert!(NUMBER_OF_KEYS <= 128, "key states are stored in a u128 bit set");

/// Only `Key`s that exist on a physical keyboard should be used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeysGroup(pub Vec<Key>);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseMotion {
	None,
	Lmb,
	Rmb,
	Mmb,
	ScrollUp,
	ScrollDown,
	Drag,
	LmbDrag,
	RmbDrag,
	MmbDrag,
}

/// The pressed state of every key, indexed by `Key as usize`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct KeyStates(u128);

impl KeyStates {
	pub const fn new() -> Self {
		Self(0)
	}

	pub fn set(&mut self, index: usize) {
		self.0 |= 1 << index;
	}

	pub fn unset(&mut self, index: usize) {
		self.0 &= !(1 << index);
	}

	pub fn get(&self, index: usize) -> bool {
		self.0 & (1 << index) != 0
	}

	pub fn key(&self, key: Key) -> bool {
		self.get(key as usize)
	}

	pub fn is_empty(&self) -> bool {
		self.0 == 0
	}

	pub fn ones(&self) -> u32 {
		self.0.count_ones()
	}

	/// True if every key set in `required` is also set in `self`.
	pub fn contains_all(&self, required: &KeyStates) -> bool {
		required.0 & !self.0 == 0
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn key_states_track_individual_keys() {
		let mut states = KeyStates::new();
		assert!(states.is_empty());

		states.set(Key::Shift as usize);
		states.set(Key::Lmb as usize);

		assert!(states.key(Key::Shift));
		assert!(states.key(Key::Lmb));
		assert!(!states.key(Key::Control));
		assert_eq!(states.ones(), 2);

		states.unset(Key::Shift as usize);
		assert!(!states.key(Key::Shift));
	}

	#[test]
	fn contains_all_requires_every_modifier() {
		let mut pressed = KeyStates::new();
		pressed.set(Key::Control as usize);
		pressed.set(Key::Shift as usize);

		let mut required = KeyStates::new();
		required.set(Key::Control as usize);
		assert!(pressed.contains_all(&required));

		required.set(Key::Alt as usize);
		assert!(!pressed.contains_all(&required));
	}
}
