mod tool_message;
mod tool_message_handler;

pub mod tool_messages;
pub mod utility_types;

#[doc(inline)]
pub use tool_message::{ToolMessage, ToolMessageDiscriminant};
#[doc(inline)]
pub use tool_message_handler::ToolMessageHandler;
