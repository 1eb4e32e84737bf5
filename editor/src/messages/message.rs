use crate::messages::prelude::*;

#[impl_message]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Message {
	NoOp,
	Init,

	#[child]
	Broadcast(BroadcastMessage),
	#[child]
	Debug(DebugMessage),
	#[child]
	Document(DocumentMessage),
	#[child]
	Frontend(FrontendMessage),
	#[child]
	InputMapper(InputMapperMessage),
	#[child]
	InputPreprocessor(InputPreprocessorMessage),
	#[child]
	Preferences(PreferencesMessage),
	#[child]
	Tool(ToolMessage),
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn discriminant_names_follow_the_message_path() {
		let message = Message::Tool(ToolMessage::UpdateHints);
		assert_eq!(message.to_discriminant().local_name(), "Tool.UpdateHints");

		let message: Message = DocumentMessage::Undo.into();
		assert_eq!(message.to_discriminant().local_name(), "Document.Undo");
	}

	#[test]
	fn leaf_messages_convert_to_the_top_parent() {
		let message: Message = NavigationMessage::WheelZoom.into();
		assert_eq!(message.to_discriminant().local_name(), "Document.Navigation.WheelZoom");
	}
}
