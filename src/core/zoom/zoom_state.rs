use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use crate::core::zoom::errors::ZoomError;

pub const DEFAULT_ZOOM_DIVISOR: f64 = 5.0;

/// Everything a frame needs to know about where the explorer is looking.
///
/// Transitions return a new value; a rejected transition leaves the
/// current state untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    viewport: Viewport,
    scale: f64,
    max_iterations: u32,
    zoom_divisor: f64,
}

impl ZoomState {
    pub fn new(
        viewport: Viewport,
        scale: f64,
        max_iterations: u32,
        zoom_divisor: f64,
    ) -> Result<Self, ZoomError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ZoomError::InvalidScale(scale));
        }

        if !(zoom_divisor.is_finite() && zoom_divisor > 1.0) {
            return Err(ZoomError::InvalidDivisor(zoom_divisor));
        }

        if max_iterations == 0 {
            return Err(ZoomError::ZeroMaxIterations);
        }

        Ok(Self {
            viewport,
            scale,
            max_iterations,
            zoom_divisor,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Half-width and half-height of the rectangle the next click creates.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn zoom_divisor(&self) -> f64 {
        self.zoom_divisor
    }

    /// Re-centres on the clicked pixel with a `2 * scale` square window.
    /// Pixel dimensions carry over unchanged.
    pub fn zoomed_at(&self, pixel: Point) -> Result<Self, ZoomError> {
        let centre = pixel_to_complex_coords(pixel, &self.viewport)?;
        let viewport = Viewport::centred_on(centre, self.scale, self.viewport.pixel_rect())?;

        Ok(Self { viewport, ..*self })
    }

    /// The state after one more completed frame.
    ///
    /// The scale shrinks by the zoom divisor until the next value would no
    /// longer be a positive normal `f64`; from then on it stays put, so the
    /// state always holds a scale `new` would accept. Zooms at that depth
    /// already fail with a degenerate viewport.
    #[must_use]
    pub fn with_advanced_scale(&self) -> Self {
        let scale = self.scale / self.zoom_divisor;

        if !scale.is_normal() {
            return *self;
        }

        Self { scale, ..*self }
    }
}
