//! Row striding used to split a frame between render workers.
//!
//! Worker `k` of `n` owns rows `k, k + n, k + 2n, ...`. Every row has
//! exactly one owner, so workers never write the same pixel. Every
//! function here expects `num_workers > 0`.

use std::iter::StepBy;
use std::ops::Range;

/// The worker that owns row `y`.
#[must_use]
pub fn row_owner(y: u32, num_workers: u32) -> u32 {
    y % num_workers
}

/// Rows owned by `worker` when `height` rows are shared by `num_workers`.
#[must_use]
pub fn stride_rows(worker: u32, num_workers: u32, height: u32) -> StepBy<Range<u32>> {
    (worker.min(height)..height).step_by(num_workers as usize)
}

/// Hands each row of `rows` to its owning worker. Entry `k` of the result
/// holds `(y, row)` pairs for worker `k`, in increasing `y`.
pub fn assign_rows<'a, I>(rows: I, num_workers: u32) -> Vec<Vec<(u32, &'a mut [u8])>>
where
    I: IntoIterator<Item = &'a mut [u8]>,
{
    let mut assignments: Vec<Vec<(u32, &'a mut [u8])>> =
        (0..num_workers).map(|_| Vec::new()).collect();

    for (y, row) in rows.into_iter().enumerate() {
        let y = y as u32;
        assignments[row_owner(y, num_workers) as usize].push((y, row));
    }

    assignments
}
