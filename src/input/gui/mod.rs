//! Windowed front end: winit for the window and events, pixels and egui for
//! drawing.

mod run_gui;
mod window_input;

pub use run_gui::{GuiError, run_gui};
pub use window_input::WindowInput;
