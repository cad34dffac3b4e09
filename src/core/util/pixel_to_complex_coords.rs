use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} image",
                    point.x,
                    point.y,
                    pixel_rect.width(),
                    pixel_rect.height()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a pixel to its complex-plane coordinate:
/// `re = min_x + x * x_step`, `im = min_y + (height - y) * y_step`.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    viewport: &Viewport,
) -> Result<Complex, PixelToComplexCoordsError> {
    let pixel_rect = viewport.pixel_rect();

    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    Ok(Complex {
        re: viewport.real_at(pixel_position.x as u32),
        im: viewport.imag_at(pixel_position.y as u32),
    })
}
