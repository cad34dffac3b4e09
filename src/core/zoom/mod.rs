pub mod controller;
pub mod errors;
pub mod input_event;
pub mod zoom_state;
