use crate::messages::prelude::*;

#[impl_message(Message, Preferences)]
#[derive(PartialEq, Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum PreferencesMessage {
	Load { preferences: String },
	ResetToDefaults,

	ReverseWheelZoom { reverse: bool },
	ViewportZoomWheelRate { rate: f64 },
}
