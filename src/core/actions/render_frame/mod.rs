pub mod errors;
pub mod frame_renderer;
pub mod ports;
pub mod render_frame_rayon;
pub mod render_frame_scoped_threads;
mod render_rows;
