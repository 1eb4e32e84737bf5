use crate::messages::debug::utility_types::MessageLoggingVerbosity;
use crate::messages::prelude::*;

#[derive(Debug, Default)]
pub struct Dispatcher {
	message_queues: Vec<VecDeque<Message>>,
	pub responses: Vec<FrontendMessage>,
	pub message_handlers: DispatcherMessageHandlers,
}

#[derive(Debug, Default)]
pub struct DispatcherMessageHandlers {
	broadcast_message_handler: BroadcastMessageHandler,
	debug_message_handler: DebugMessageHandler,
	pub document_message_handler: DocumentMessageHandler,
	input_mapper_message_handler: InputMapperMessageHandler,
	pub input_preprocessor_message_handler: InputPreprocessorMessageHandler,
	pub preferences_message_handler: PreferencesMessageHandler,
	pub tool_message_handler: ToolMessageHandler,
}

/// For optimization, these are messages guaranteed to be redundant when repeated.
/// The last occurrence of the message in the message queue is sufficient to ensure correct behavior.
/// In addition, these messages do not change any state in the backend (aside from caches).
const SIDE_EFFECT_FREE_MESSAGES: &[MessageDiscriminant] = &[MessageDiscriminant::Frontend(FrontendMessageDiscriminant::RefreshViewport)];

/// Frequent-but-noisy messages skipped by the message logging, which would otherwise drown out everything else.
const MESSAGE_LOGGING_ENDING_BLOCK_LIST: &[&str] = &["PointerMove", "WheelScroll"];

impl Dispatcher {
	pub fn new() -> Self {
		Self::default()
	}

	// If the deepest queues (higher index in the queues list) are now empty (after being popped from) then remove them
	fn cleanup_queues(&mut self, leave_last: bool) {
		while self.message_queues.last().filter(|queue| queue.is_empty()).is_some() {
			if leave_last && self.message_queues.len() == 1 {
				break;
			}
			self.message_queues.pop();
		}
	}

	/// Add a message to a queue so that it can be executed.
	/// If `process_after_all_current` is set, all currently queued messages (including children) will be processed first.
	/// If not set, it (and its children) will be processed as soon as possible.
	pub fn schedule_execution(message_queues: &mut Vec<VecDeque<Message>>, process_after_all_current: bool, messages: impl IntoIterator<Item = Message>) {
		match message_queues.first_mut() {
			// If there are currently messages being processed and we are processing after them, add to the end of the first queue
			Some(queue) if process_after_all_current => queue.extend(messages),
			// In all other cases, make a new inner queue and add our message there
			_ => message_queues.push(VecDeque::from_iter(messages)),
		}
	}

	pub fn handle_message<T: Into<Message>>(&mut self, message: T, process_after_all_current: bool) {
		let message = message.into();

		Self::schedule_execution(&mut self.message_queues, process_after_all_current, [message]);

		while let Some(message) = self.message_queues.last_mut().and_then(VecDeque::pop_front) {
			// Skip processing of this message if it will be processed later (at the end of the shallowest level queue)
			if SIDE_EFFECT_FREE_MESSAGES.contains(&message.to_discriminant()) {
				let already_in_queue = self.message_queues.first().filter(|queue| queue.contains(&message)).is_some();
				if already_in_queue {
					self.cleanup_queues(false);
					continue;
				} else if self.message_queues.len() > 1 {
					self.cleanup_queues(true);
					self.message_queues[0].add(message);
					continue;
				}
			}

			self.log_message(&message);

			// Create a new queue for the child messages
			let mut queue = VecDeque::new();

			// Process the action by forwarding it to the relevant message handler, or saving the FrontendMessage to be sent to the frontend
			match message {
				Message::NoOp => {}
				Message::Init => {
					queue.add(ToolMessage::InitTools);
				}
				Message::Broadcast(message) => {
					self.message_handlers.broadcast_message_handler.process_message(message, &mut queue, ());
				}
				Message::Debug(message) => {
					self.message_handlers.debug_message_handler.process_message(message, &mut queue, ());
				}
				Message::Document(message) => {
					let context = DocumentMessageContext {
						ipp: &self.message_handlers.input_preprocessor_message_handler,
						preferences: &self.message_handlers.preferences_message_handler,
					};
					self.message_handlers.document_message_handler.process_message(message, &mut queue, context);
				}
				Message::Frontend(message) => {
					// `FrontendMessage`s are saved and will be sent to the frontend after the message queue is done being processed
					self.responses.push(message);
				}
				Message::InputMapper(message) => {
					let actions = self.collect_actions();
					let input = &self.message_handlers.input_preprocessor_message_handler;

					self.message_handlers.input_mapper_message_handler.process_message(message, &mut queue, (input, actions));
				}
				Message::InputPreprocessor(message) => {
					self.message_handlers.input_preprocessor_message_handler.process_message(message, &mut queue, ());
				}
				Message::Preferences(message) => {
					self.message_handlers.preferences_message_handler.process_message(message, &mut queue, ());
				}
				Message::Tool(message) => {
					let document = &self.message_handlers.document_message_handler;
					let input = &self.message_handlers.input_preprocessor_message_handler;

					self.message_handlers.tool_message_handler.process_message(message, &mut queue, (document, input));
				}
			}

			// If there are child messages, process them before the rest of the current queue
			if !queue.is_empty() {
				self.message_queues.push(queue);
			}

			self.cleanup_queues(false);
		}
	}

	pub fn collect_actions(&self) -> ActionList {
		let mut list = Vec::new();
		list.extend(self.message_handlers.debug_message_handler.actions());
		list.extend(self.message_handlers.document_message_handler.actions());
		list.extend(self.message_handlers.tool_message_handler.actions());
		list
	}

	fn log_message(&self, message: &Message) {
		let verbosity = self.message_handlers.debug_message_handler.message_logging_verbosity;
		if matches!(verbosity, MessageLoggingVerbosity::Off) {
			return;
		}

		let name = message.to_discriminant().local_name();
		if MESSAGE_LOGGING_ENDING_BLOCK_LIST.iter().any(|blocked| name.ends_with(blocked)) {
			return;
		}

		match verbosity {
			MessageLoggingVerbosity::Off => {}
			MessageLoggingVerbosity::Names => log::info!("Message: {name}"),
			MessageLoggingVerbosity::Contents => log::info!("Message: {name} {message:?}"),
		}
	}
}
