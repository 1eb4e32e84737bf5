mod input_mapper_message;
mod input_mapper_message_handler;

pub mod default_mapping;
pub mod utility_types;

#[doc(inline)]
pub use input_mapper_message::{InputMapperMessage, InputMapperMessageDiscriminant};
#[doc(inline)]
pub use input_mapper_message_handler::InputMapperMessageHandler;
