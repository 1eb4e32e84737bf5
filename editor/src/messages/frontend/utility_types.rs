use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub enum MouseCursorIcon {
	#[default]
	Default,
	Crosshair,
	Grab,
	Grabbing,
	ZoomIn,
}
