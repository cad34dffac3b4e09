use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;
use std::slice::ChunksExactMut;

pub const BYTES_PER_PIXEL: usize = 3;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        pixel_rect: PixelRect,
    },
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_rect_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel rect size {} does not match buffer size {}",
                    pixel_rect_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, pixel_rect } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} image",
                    pixel.x,
                    pixel.y,
                    pixel_rect.width(),
                    pixel_rect.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB image, three bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            buffer: vec![0; pixel_rect_to_buffer_size(pixel_rect)],
        }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn row_len(&self) -> usize {
        self.pixel_rect.width() as usize * BYTES_PER_PIXEL
    }

    /// One mutable slice per image row, top row first.
    pub(crate) fn rows_mut(&mut self) -> ChunksExactMut<'_, u8> {
        let row_len = self.row_len();
        self.buffer.chunks_exact_mut(row_len)
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.pixel_rect.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        }

        Ok(pixel.y as usize * self.row_len() + pixel.x as usize * BYTES_PER_PIXEL)
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    /// Copies the image into an RGBA surface of the same dimensions with
    /// opaque alpha.
    pub fn copy_to_rgba(&self, dst: &mut [u8]) -> Result<(), PixelBufferError> {
        let expected = self.pixel_rect.size() as usize * 4;

        if dst.len() != expected {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: expected,
                buffer_size: dst.len(),
            });
        }

        for (src_pixel, dst_pixel) in self
            .buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(dst.chunks_exact_mut(4))
        {
            dst_pixel[..BYTES_PER_PIXEL].copy_from_slice(src_pixel);
            dst_pixel[3] = u8::MAX;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_pixel_rect(width: u32, height: u32) -> PixelRect {
        PixelRect::new(width, height).unwrap()
    }

    fn buffer_with(pixel_rect: PixelRect, data: &[u8]) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(pixel_rect);
        buffer.buffer.copy_from_slice(data);
        buffer
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let pixel_rect = create_pixel_rect(10, 10);
        let buffer = PixelBuffer::new(pixel_rect);

        assert_eq!(buffer.pixel_rect(), pixel_rect);
        assert_eq!(buffer.buffer_size(), 300); // 10 * 10 * 3
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pixel_is_row_major() {
        let pixel_rect = create_pixel_rect(3, 3);
        let mut data = vec![0u8; 27];
        // row 2 starts at byte 18, column 1 is three bytes further
        data[21..24].copy_from_slice(&[255, 0, 0]);
        let buffer = buffer_with(pixel_rect, &data);

        assert_eq!(buffer.pixel(Point { x: 1, y: 2 }), Ok(Colour { r: 255, g: 0, b: 0 }));
        assert_eq!(buffer.pixel(Point { x: 2, y: 1 }), Ok(Colour::BLACK));
    }

    #[test]
    fn test_pixel_outside_bounds() {
        let pixel_rect = create_pixel_rect(3, 3);
        let buffer = PixelBuffer::new(pixel_rect);

        assert_eq!(
            buffer.pixel(Point { x: 3, y: 1 }),
            Err(PixelBufferError::PixelOutsideBounds {
                pixel: Point { x: 3, y: 1 },
                pixel_rect
            })
        );
        assert!(buffer.pixel(Point { x: -1, y: 0 }).is_err());
    }

    #[test]
    fn test_rows_mut_yields_one_slice_per_row() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(4, 5));
        let rows: Vec<usize> = buffer.rows_mut().map(|row| row.len()).collect();

        assert_eq!(rows, vec![12; 5]);
    }

    #[test]
    fn test_copy_to_rgba() {
        let pixel_rect = create_pixel_rect(2, 1);
        let buffer = buffer_with(pixel_rect, &[10, 20, 30, 40, 50, 60]);
        let mut dst = vec![0; 8];

        buffer.copy_to_rgba(&mut dst).unwrap();

        assert_eq!(dst, vec![10, 20, 30, 255, 40, 50, 60, 255]);
    }

    #[test]
    fn test_copy_to_rgba_rejects_wrong_surface_size() {
        let buffer = PixelBuffer::new(create_pixel_rect(2, 2));
        let mut dst = vec![0; 12];

        assert_eq!(
            buffer.copy_to_rgba(&mut dst),
            Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: 16,
                buffer_size: 12
            })
        );
    }
}
