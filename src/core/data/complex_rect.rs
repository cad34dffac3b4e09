use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
    NonFiniteBounds { min: Complex, max: Complex },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
            Self::NonFiniteBounds { min, max } => {
                write!(
                    f,
                    "complex rect bounds must be finite: ({}, {}) to ({}, {})",
                    min.re, min.im, max.re, max.im
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// An axis-aligned region of the complex plane. `min` holds the smallest
/// real and imaginary parts, `max` the largest.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    min: Complex,
    max: Complex,
}

impl ComplexRect {
    pub fn new(min: Complex, max: Complex) -> Result<Self, ComplexRectError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ComplexRectError::NonFiniteBounds { min, max });
        }

        let width = max.re - min.re;
        let height = max.im - min.im;

        // also rejects a width or height that overflowed to infinity
        if !(width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite()) {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self { min, max })
    }

    /// The square of half-extent `half_extent` centred on `centre`.
    pub fn centred_on(centre: Complex, half_extent: f64) -> Result<Self, ComplexRectError> {
        Self::new(
            Complex::new(centre.re - half_extent, centre.im - half_extent),
            Complex::new(centre.re + half_extent, centre.im + half_extent),
        )
    }

    #[must_use]
    pub fn min(&self) -> Complex {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Complex {
        self.max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.re - self.min.re
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.im - self.min.im
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        Complex::new(
            self.min.re + self.width() / 2.0,
            self.min.im + self.height() / 2.0,
        )
    }
}
