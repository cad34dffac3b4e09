use log::info;

use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::ports::frame_presenter::FramePresenterPort;

/// Headless presenter: reports each frame through the logger and keeps
/// nothing but a running total.
#[derive(Debug, Default)]
pub struct LogPresenter {
    frames_presented: u64,
    bytes_presented: u64,
}

impl LogPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    #[must_use]
    pub fn bytes_presented(&self) -> u64 {
        self.bytes_presented
    }
}

impl FramePresenterPort for LogPresenter {
    fn present(&mut self, frame: &FrameData) {
        let viewport = frame.viewport;
        info!(
            "frame {}: {}x{} real [{}, {}] imag [{}, {}] scale {} in {:?}",
            frame.frame_index,
            viewport.width(),
            viewport.height(),
            viewport.min_x(),
            viewport.max_x(),
            viewport.min_y(),
            viewport.max_y(),
            frame.scale,
            frame.render_duration
        );

        self.frames_presented += 1;
        self.bytes_presented += frame.pixel_buffer.buffer_size() as u64;
    }
}
