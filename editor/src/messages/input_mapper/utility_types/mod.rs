pub mod input_keyboard;
pub mod input_mouse;
pub mod macros;
pub mod misc;
