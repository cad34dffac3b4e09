use crate::core::data::complex::Complex;

/// Per-point computation run by the render workers. Implementations must
/// be pure: the same point always yields the same result, whichever worker
/// asks.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, point: Complex) -> Self::Success;
}
