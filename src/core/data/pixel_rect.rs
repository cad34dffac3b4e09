use std::error::Error;
use std::fmt;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

/// Pixel dimensions of an image anchored at (0, 0). Row 0 is the top row.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width == 0 || height == 0 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}
