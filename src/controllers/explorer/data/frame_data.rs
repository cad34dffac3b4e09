use std::time::Duration;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;

#[derive(Debug)]
pub struct FrameData {
    /// Zero-based count of frames rendered before this one.
    pub frame_index: u64,
    pub viewport: Viewport,
    /// Zoom scale a click on this frame will use.
    pub scale: f64,
    pub render_duration: Duration,
    pub pixel_buffer: PixelBuffer,
}
