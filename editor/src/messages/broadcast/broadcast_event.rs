use crate::messages::prelude::*;

#[impl_message(Message, BroadcastMessage, TriggerEvent)]
#[derive(PartialEq, Eq, Clone, Debug, Hash, serde::Serialize, serde::Deserialize)]
pub enum BroadcastEvent {
	DocumentIsDirty,
	SelectionChanged,
	ToolAbort,
}
