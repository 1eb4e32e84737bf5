use crate::messages::input_mapper::utility_types::input_keyboard::Key;
use crate::messages::prelude::*;

use serde::{Deserialize, Serialize};

#[impl_message(Message, InputMapper)]
#[derive(PartialEq, Eq, Clone, Debug, Hash, Serialize, Deserialize)]
pub enum InputMapperMessage {
	// Sub-messages
	#[child]
	KeyDown(Key),
	#[child]
	KeyUp(Key),

	// Messages
	PointerMove,
	WheelScroll,
}
