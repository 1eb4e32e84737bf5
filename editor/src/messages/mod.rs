//! The root-level messages forming the first layer of the message system architecture.

pub mod broadcast;
pub mod debug;
pub mod document;
pub mod frontend;
pub mod input_mapper;
pub mod input_preprocessor;
pub mod message;
pub mod prelude;
pub mod preferences;
pub mod tool;
