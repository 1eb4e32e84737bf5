use crate::consts::VIEWPORT_ZOOM_WHEEL_RATE;
use crate::messages::prelude::*;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferencesMessageHandler {
	pub viewport_zoom_wheel_rate: f64,
	pub reverse_wheel_zoom: bool,
}

impl Default for PreferencesMessageHandler {
	fn default() -> Self {
		Self {
			viewport_zoom_wheel_rate: VIEWPORT_ZOOM_WHEEL_RATE,
			reverse_wheel_zoom: false,
		}
	}
}

impl MessageHandler<PreferencesMessage, ()> for PreferencesMessageHandler {
	fn process_message(&mut self, message: PreferencesMessage, _responses: &mut VecDeque<Message>, _: ()) {
		match message {
			PreferencesMessage::Load { preferences } => match serde_json::from_str::<PreferencesMessageHandler>(&preferences) {
				Ok(deserialized) => *self = deserialized,
				Err(error) => log::warn!("failed to deserialize preferences: {error}"),
			},
			PreferencesMessage::ResetToDefaults => *self = Self::default(),
			PreferencesMessage::ReverseWheelZoom { reverse } => self.reverse_wheel_zoom = reverse,
			PreferencesMessage::ViewportZoomWheelRate { rate } => self.viewport_zoom_wheel_rate = rate,
		}
	}

	advertise_actions!();
}
