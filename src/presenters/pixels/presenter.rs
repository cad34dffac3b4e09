use log::{error, trace};
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::ports::frame_presenter::FramePresenterPort;
use crate::core::data::point::Point;

/// Presents frames into a `pixels` framebuffer sized to the render, scaled
/// onto the window surface.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self { pixels })
    }

    /// Maps a physical window position onto framebuffer pixels. Positions
    /// in the letterbox map to out-of-image points, which zooming rejects.
    #[must_use]
    pub fn window_to_image(&self, physical: (f64, f64)) -> Point {
        let (x, y) = match self
            .pixels
            .window_pos_to_pixel((physical.0 as f32, physical.1 as f32))
        {
            Ok((x, y)) => (x as isize, y as isize),
            Err(outside) => outside,
        };

        Point {
            x: i32::try_from(x).unwrap_or(i32::MIN),
            y: i32::try_from(y).unwrap_or(i32::MIN),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        if let Err(err) = self.pixels.resize_surface(width, height) {
            error!("failed to resize surface to {}x{}: {}", width, height, err);
        }
    }

    pub fn render(&self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}

impl FramePresenterPort for PixelsPresenter {
    fn present(&mut self, frame: &FrameData) {
        match frame.pixel_buffer.copy_to_rgba(self.pixels.frame_mut()) {
            Ok(()) => trace!("frame {} copied to surface", frame.frame_index),
            Err(err) => error!("dropping frame {}: {}", frame.frame_index, err),
        }
    }
}
