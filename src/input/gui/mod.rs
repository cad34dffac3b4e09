//! Windowed harness: winit for the window and its input events, pixels for
//! the framebuffer. Left click zooms, `q` or Escape quits.

mod app;

pub use app::run_gui;
