use std::num::NonZeroU32;
use std::panic::{self, AssertUnwindSafe};

use log::{error, trace};
use rayon::ThreadPool;

use crate::core::actions::render_frame::errors::RenderError;
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_frame::render_rows::render_worker_rows;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::util::calculate_worker_threads::calculate_worker_threads;
use crate::core::util::stride_row_partition::assign_rows;

/// Builds the reusable pool behind [`render_frame_rayon`].
pub fn build_render_pool(num_threads: NonZeroU32) -> Result<ThreadPool, RenderError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads.get() as usize)
        .thread_name(|index| format!("render-pool-{index}"))
        .build()?;

    Ok(pool)
}

/// Renders `viewport` on an existing rayon pool.
///
/// Uses the same row striding as the scoped-thread renderer: one rayon task
/// per worker, each owning its rows' slices. `pool.scope` is the join
/// barrier, so the buffer is only returned once every task has finished.
pub fn render_frame_rayon<Alg, CMap>(
    pool: &ThreadPool,
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

    // rayon re-raises a task panic from `scope` once all tasks are done
    let outcome = panic::catch_unwind(AssertUnwindSafe(move || {
        pool.scope(move |scope| {
            for (worker, rows) in assignments.into_iter().enumerate() {
                scope.spawn(move |_| {
                    trace!("pool task {} rendering {} rows", worker, rows.len());
                    render_worker_rows(rows, viewport, algorithm, colour_map);
                });
            }
        });
    }));

    if outcome.is_err() {
        error!("render task panicked on the worker pool");
        return Err(RenderError::WorkerPanicked);
    }

    Ok(pixel_buffer)
}
