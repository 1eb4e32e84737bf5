pub mod broadcast_event;
mod broadcast_message;
mod broadcast_message_handler;

#[doc(inline)]
pub use broadcast_message::{BroadcastMessage, BroadcastMessageDiscriminant};
#[doc(inline)]
pub use broadcast_message_handler::BroadcastMessageHandler;
