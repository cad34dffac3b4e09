use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time count for `c`.
///
/// Starts from `z = c` and applies `z = z² + c`. Returns the 0-based step
/// at which `|z|` first exceeds 2, or `max_iterations` if it never does
/// within `max_iterations` steps. The result is always in
/// `0..=max_iterations`.
#[must_use]
pub fn escape_count(c: Complex, max_iterations: u32) -> u32 {
    let mut z = c;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
        z = z.square() + c;
    }

    max_iterations
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    fn compute(&self, point: Complex) -> u32 {
        escape_count(point, self.max_iterations)
    }
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self { max_iterations })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
