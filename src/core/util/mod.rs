pub mod calculate_worker_threads;
pub mod pixel_to_complex_coords;
pub mod stride_row_partition;
