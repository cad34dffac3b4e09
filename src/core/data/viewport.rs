use std::error::Error;
use std::fmt;

use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::pixel_rect::PixelRect;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    Region(ComplexRectError),
    DegenerateStep { x_step: f64, y_step: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Region(err) => write!(f, "invalid viewport region: {}", err),
            Self::DegenerateStep { x_step, y_step } => {
                write!(
                    f,
                    "viewport steps must be positive and finite: x_step {}, y_step {}",
                    x_step, y_step
                )
            }
        }
    }
}

impl Error for ViewportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Region(err) => Some(err),
            Self::DegenerateStep { .. } => None,
        }
    }
}

impl From<ComplexRectError> for ViewportError {
    fn from(err: ComplexRectError) -> Self {
        Self::Region(err)
    }
}

/// A region of the complex plane mapped onto an image.
///
/// The per-pixel steps are derived from the bounds at construction and the
/// type has no setters, so bounds and steps can never disagree. Moving the
/// view means building a new `Viewport`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    region: ComplexRect,
    pixel_rect: PixelRect,
    x_step: f64,
    y_step: f64,
}

impl Viewport {
    pub fn new(region: ComplexRect, pixel_rect: PixelRect) -> Result<Self, ViewportError> {
        let x_step = region.width() / f64::from(pixel_rect.width());
        let y_step = region.height() / f64::from(pixel_rect.height());

        // at extreme zoom the step can underflow to zero or subnormal noise
        if !(x_step.is_normal() && x_step > 0.0 && y_step.is_normal() && y_step > 0.0) {
            return Err(ViewportError::DegenerateStep { x_step, y_step });
        }

        Ok(Self {
            region,
            pixel_rect,
            x_step,
            y_step,
        })
    }

    pub fn centred_on(
        centre: Complex,
        half_extent: f64,
        pixel_rect: PixelRect,
    ) -> Result<Self, ViewportError> {
        Self::new(ComplexRect::centred_on(centre, half_extent)?, pixel_rect)
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.region.min().re
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.region.max().re
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.region.min().im
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.region.max().im
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixel_rect.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixel_rect.height()
    }

    #[must_use]
    pub fn x_step(&self) -> f64 {
        self.x_step
    }

    #[must_use]
    pub fn y_step(&self) -> f64 {
        self.y_step
    }

    /// Real part of column `x`. Unchecked; see `pixel_to_complex_coords`.
    #[must_use]
    pub fn real_at(&self, x: u32) -> f64 {
        self.min_x() + f64::from(x) * self.x_step
    }

    /// Imaginary part of row `y`. Row 0 is the top of the image, which is
    /// the largest imaginary value.
    #[must_use]
    pub fn imag_at(&self, y: u32) -> f64 {
        self.min_y() + f64::from(self.height() - y) * self.y_step
    }
}
