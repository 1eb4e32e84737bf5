use super::utility_types::misc::Mapping;
use crate::messages::prelude::*;

#[derive(Debug, Default)]
pub struct InputMapperMessageHandler {
	mapping: Mapping,
}

impl<'a> MessageHandler<InputMapperMessage, (&'a InputPreprocessorMessageHandler, ActionList)> for InputMapperMessageHandler {
	fn process_message(&mut self, message: InputMapperMessage, responses: &mut VecDeque<Message>, (input, actions): (&'a InputPreprocessorMessageHandler, ActionList)) {
		if let Some(message) = self.mapping.match_input_message(message, &input.keyboard, actions) {
			responses.add(message);
		}
	}

	advertise_actions!();
}

impl InputMapperMessageHandler {
	pub fn set_mapping(&mut self, mapping: Mapping) {
		self.mapping = mapping;
	}
}
