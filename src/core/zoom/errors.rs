use std::{error::Error, fmt};

use crate::core::data::viewport::ViewportError;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomError {
    ClickOutsideImage(PixelToComplexCoordsError),
    Viewport(ViewportError),
    InvalidScale(f64),
    InvalidDivisor(f64),
    ZeroMaxIterations,
}

impl fmt::Display for ZoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClickOutsideImage(err) => write!(f, "click rejected: {}", err),
            Self::Viewport(err) => write!(f, "zoom produced an unusable viewport: {}", err),
            Self::InvalidScale(scale) => {
                write!(f, "zoom scale must be positive and finite, got {}", scale)
            }
            Self::InvalidDivisor(divisor) => {
                write!(f, "zoom divisor must be finite and greater than 1, got {}", divisor)
            }
            Self::ZeroMaxIterations => write!(f, "Maximum iterations must be greater than zero"),
        }
    }
}

impl Error for ZoomError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ClickOutsideImage(err) => Some(err),
            Self::Viewport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PixelToComplexCoordsError> for ZoomError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::ClickOutsideImage(err)
    }
}

impl From<ViewportError> for ZoomError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}
