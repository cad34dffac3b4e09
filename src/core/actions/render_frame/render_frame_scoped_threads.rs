use std::io;
use std::num::NonZeroU32;
use std::thread::{self, Scope, ScopedJoinHandle};

use log::{error, trace};

use crate::core::actions::render_frame::errors::RenderError;
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_frame::render_rows::render_worker_rows;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::util::calculate_worker_threads::calculate_worker_threads;
use crate::core::util::stride_row_partition::assign_rows;

/// Renders `viewport` on freshly spawned scoped threads, one per worker.
///
/// Worker `k` owns rows `k, k + n, ...` and receives exclusive `&mut`
/// slices for exactly those rows, so no two workers can touch the same
/// pixel. Returns once every worker has joined.
pub fn render_frame_scoped_threads<Alg, CMap>(
    viewport: &Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
    num_threads: NonZeroU32,
) -> Result<PixelBuffer, RenderError>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    let pixel_rect = viewport.pixel_rect();
    let num_workers = calculate_worker_threads(num_threads, pixel_rect).get();
    let mut pixel_buffer = PixelBuffer::new(pixel_rect);
    let assignments = assign_rows(pixel_buffer.rows_mut(), num_workers);

    let jobs = assignments.into_iter().enumerate().map(move |(worker, rows)| {
        move || {
            trace!("worker {} rendering {} rows", worker, rows.len());
            render_worker_rows(rows, viewport, algorithm, colour_map);
        }
    });

    let failed_workers = thread::scope(|scope| {
        run_workers(scope, jobs, |scope, worker, job| {
            thread::Builder::new()
                .name(format!("render-worker-{worker}"))
                .spawn_scoped(scope, job)
        })
    })?;

    if failed_workers > 0 {
        error!("{} of {} render workers panicked", failed_workers, num_workers);
        return Err(RenderError::WorkerPanicked);
    }

    Ok(pixel_buffer)
}

/// Spawns one thread per job and joins every thread that started, even
/// when a later spawn fails, so a panicked worker is always observed here
/// rather than re-raised by the scope. Returns how many workers panicked.
fn run_workers<'scope, 'env, I, F, S>(
    scope: &'scope Scope<'scope, 'env>,
    jobs: I,
    mut spawn: S,
) -> Result<usize, RenderError>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() + Send + 'scope,
    S: FnMut(&'scope Scope<'scope, 'env>, usize, F) -> io::Result<ScopedJoinHandle<'scope, ()>>,
{
    let mut handles = Vec::new();
    let mut spawn_error = None;

    for (worker, job) in jobs.into_iter().enumerate() {
        match spawn(scope, worker, job) {
            Ok(handle) => handles.push(handle),
            Err(err) => {
                spawn_error = Some(err);
                break;
            }
        }
    }

    let started = handles.len();
    let failed = handles
        .into_iter()
        .map(ScopedJoinHandle::join)
        .filter(Result::is_err)
        .count();

    match spawn_error {
        Some(err) => {
            error!("failed to spawn render worker {}: {}", started, err);
            Err(err.into())
        }
        None => Ok(failed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::data::point::Point;
    use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
    use crate::core::fractals::mandelbrot::colour_map::MandelbrotBandedColourMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn threads(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    fn viewport(width: u32, height: u32) -> Viewport {
        Viewport::new(
            ComplexRect::new(Complex::new(-2.0, -1.25), Complex::new(0.5, 1.25)).unwrap(),
            PixelRect::new(width, height).unwrap(),
        )
        .unwrap()
    }

    #[derive(Debug, Default)]
    struct CountingAlgorithm {
        calls: AtomicUsize,
    }

    impl FractalAlgorithm for CountingAlgorithm {
        type Success = u32;

        fn compute(&self, _: Complex) -> u32 {
            self.calls.fetch_add(1, Ordering::Relaxed);
            1
        }
    }

    struct WhiteColourMap;

    impl ColourMap<u32> for WhiteColourMap {
        fn map(&self, _: u32) -> Colour {
            Colour { r: 255, g: 255, b: 255 }
        }

        fn display_name(&self) -> &str {
            "White"
        }
    }

    struct PanickingAlgorithm;

    impl FractalAlgorithm for PanickingAlgorithm {
        type Success = u32;

        fn compute(&self, point: Complex) -> u32 {
            if point.im < 0.0 {
                panic!("stub failure below the real axis");
            }
            0
        }
    }

    #[test]
    fn test_output_is_identical_for_any_thread_count() {
        let viewport = viewport(64, 48);
        let algorithm = MandelbrotAlgorithm::new(100).unwrap();
        let reference =
            render_frame_scoped_threads(&viewport, &algorithm, &MandelbrotBandedColourMap, threads(1))
                .unwrap();

        for num_threads in [2, 3, 7, 8, 48, 64] {
            let frame = render_frame_scoped_threads(
                &viewport,
                &algorithm,
                &MandelbrotBandedColourMap,
                threads(num_threads),
            )
            .unwrap();

            assert_eq!(frame, reference, "{num_threads} threads");
        }
    }

    #[test]
    fn test_every_pixel_computed_exactly_once() {
        let viewport = viewport(13, 11);
        let algorithm = CountingAlgorithm::default();

        let frame =
            render_frame_scoped_threads(&viewport, &algorithm, &WhiteColourMap, threads(4)).unwrap();

        assert_eq!(algorithm.calls.load(Ordering::Relaxed), 13 * 11);
        assert!(frame.buffer().iter().all(|&byte| byte == 255));
    }

    #[test]
    fn test_single_row_image() {
        let viewport = viewport(5, 1);
        let algorithm = CountingAlgorithm::default();

        let frame =
            render_frame_scoped_threads(&viewport, &algorithm, &WhiteColourMap, threads(8)).unwrap();

        assert_eq!(frame.buffer_size(), 15);
        assert_eq!(algorithm.calls.load(Ordering::Relaxed), 5);
    }

    #[test]
    fn test_pixels_match_pointwise_evaluation() {
        // steps of 0.5 are exact, so the running sum matches the mapper
        let viewport = Viewport::new(
            ComplexRect::new(Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0)).unwrap(),
            PixelRect::new(8, 8).unwrap(),
        )
        .unwrap();
        let algorithm = MandelbrotAlgorithm::new(50).unwrap();
        let frame =
            render_frame_scoped_threads(&viewport, &algorithm, &MandelbrotBandedColourMap, threads(3))
                .unwrap();

        for y in 0..8 {
            for x in 0..8 {
                let point = Point { x, y };
                let c = crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords(
                    point, &viewport,
                )
                .unwrap();
                let expected = MandelbrotBandedColourMap.map(algorithm.compute(c));

                assert_eq!(frame.pixel(point), Ok(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_worker_panic_fails_the_whole_render() {
        let viewport = viewport(8, 8);

        let result =
            render_frame_scoped_threads(&viewport, &PanickingAlgorithm, &WhiteColourMap, threads(4));

        assert!(matches!(result, Err(RenderError::WorkerPanicked)));
    }

    #[test]
    fn test_spawn_failure_after_worker_panic_returns_error() {
        let jobs: Vec<Box<dyn FnOnce() + Send>> = vec![
            Box::new(|| panic!("stub failure in first worker")),
            Box::new(|| {}),
        ];

        let result = thread::scope(|scope| {
            run_workers(scope, jobs, |scope, worker, job| {
                if worker == 1 {
                    return Err(io::Error::other("out of threads"));
                }
                thread::Builder::new().spawn_scoped(scope, job)
            })
        });

        assert!(matches!(result, Err(RenderError::Spawn(_))));
    }

    #[test]
    fn test_run_workers_counts_panicked_workers() {
        let jobs: Vec<Box<dyn FnOnce() + Send>> = vec![
            Box::new(|| {}),
            Box::new(|| panic!("stub failure")),
            Box::new(|| panic!("stub failure")),
        ];

        let failed = thread::scope(|scope| {
            run_workers(scope, jobs, |scope, _, job| {
                thread::Builder::new().spawn_scoped(scope, job)
            })
        });

        assert_eq!(failed.unwrap(), 2);
    }
}
