use crate::core::data::pixel_rect::PixelRect;
use std::num::NonZeroU32;

/// Threads the machine offers, falling back to one.
#[must_use]
pub fn available_threads() -> NonZeroU32 {
    std::thread::available_parallelism()
        .ok()
        .and_then(|n| NonZeroU32::new(n.get() as u32))
        .unwrap_or(NonZeroU32::MIN)
}

/// Workers actually worth spawning for `pixel_rect`: a worker beyond the
/// row count would own no rows.
#[must_use]
pub fn calculate_worker_threads(requested: NonZeroU32, pixel_rect: PixelRect) -> NonZeroU32 {
    requested.min(NonZeroU32::new(pixel_rect.height()).unwrap_or(NonZeroU32::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threads(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn test_available_threads_is_at_least_one() {
        assert!(available_threads().get() >= 1);
    }

    #[test]
    fn test_requested_threads_kept_when_rows_suffice() {
        let pixel_rect = PixelRect::new(10, 800).unwrap();

        assert_eq!(calculate_worker_threads(threads(8), pixel_rect), threads(8));
    }

    #[test]
    fn test_threads_capped_at_row_count() {
        let pixel_rect = PixelRect::new(10, 3).unwrap();

        assert_eq!(calculate_worker_threads(threads(8), pixel_rect), threads(3));
    }

    #[test]
    fn test_single_row_gives_one_thread() {
        let pixel_rect = PixelRect::new(100, 1).unwrap();

        assert_eq!(calculate_worker_threads(threads(16), pixel_rect), threads(1));
    }
}
