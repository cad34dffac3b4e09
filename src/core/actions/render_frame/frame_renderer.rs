use std::fmt;
use std::num::NonZeroU32;

use log::debug;
use rayon::ThreadPool;

use crate::core::actions::render_frame::errors::RenderError;
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_frame::render_frame_rayon::{build_render_pool, render_frame_rayon};
use crate::core::actions::render_frame::render_frame_scoped_threads::render_frame_scoped_threads;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotBandedColourMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    /// Spawn and join fresh threads for every frame.
    ScopedThreads,
    /// Keep a rayon pool alive between frames.
    #[default]
    WorkerPool,
}

impl fmt::Display for RenderStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScopedThreads => write!(f, "scoped threads"),
            Self::WorkerPool => write!(f, "worker pool"),
        }
    }
}

enum Backend {
    ScopedThreads,
    WorkerPool(ThreadPool),
}

/// Renders frames with a fixed worker count and strategy.
///
/// Output is bit-identical across strategies and thread counts.
pub struct FrameRenderer {
    num_threads: NonZeroU32,
    backend: Backend,
}

impl fmt::Debug for FrameRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameRenderer")
            .field("num_threads", &self.num_threads)
            .field("strategy", &self.strategy())
            .finish()
    }
}

impl FrameRenderer {
    pub fn new(strategy: RenderStrategy, num_threads: u32) -> Result<Self, RenderError> {
        let num_threads = NonZeroU32::new(num_threads).ok_or(RenderError::ZeroThreads)?;

        let backend = match strategy {
            RenderStrategy::ScopedThreads => Backend::ScopedThreads,
            RenderStrategy::WorkerPool => Backend::WorkerPool(build_render_pool(num_threads)?),
        };

        debug!("frame renderer ready: {} with {} threads", strategy, num_threads);

        Ok(Self {
            num_threads,
            backend,
        })
    }

    #[must_use]
    pub fn strategy(&self) -> RenderStrategy {
        match self.backend {
            Backend::ScopedThreads => RenderStrategy::ScopedThreads,
            Backend::WorkerPool(_) => RenderStrategy::WorkerPool,
        }
    }

    #[must_use]
    pub fn num_threads(&self) -> u32 {
        self.num_threads.get()
    }

    pub fn render<Alg, CMap>(
        &self,
        viewport: &Viewport,
        algorithm: &Alg,
        colour_map: &CMap,
    ) -> Result<PixelBuffer, RenderError>
    where
        Alg: FractalAlgorithm + Sync,
        CMap: ColourMap<Alg::Success> + Sync,
    {
        match &self.backend {
            Backend::ScopedThreads => {
                render_frame_scoped_threads(viewport, algorithm, colour_map, self.num_threads)
            }
            Backend::WorkerPool(pool) => {
                render_frame_rayon(pool, viewport, algorithm, colour_map, self.num_threads)
            }
        }
    }

    pub fn render_mandelbrot(
        &self,
        viewport: &Viewport,
        max_iterations: u32,
    ) -> Result<PixelBuffer, RenderError> {
        let algorithm = MandelbrotAlgorithm::new(max_iterations)?;

        self.render(viewport, &algorithm, &MandelbrotBandedColourMap)
    }
}

/// Renders one Mandelbrot frame of `viewport` using `num_threads` scoped
/// workers, banded colouring, RGB bytes in row-major order.
///
/// Fails with [`RenderError::ZeroThreads`] or, for `max_iterations == 0`,
/// [`RenderError::Algorithm`]. Thread counts above the image height are
/// capped.
pub fn render_mandelbrot(
    viewport: &Viewport,
    max_iterations: u32,
    num_threads: u32,
) -> Result<PixelBuffer, RenderError> {
    FrameRenderer::new(RenderStrategy::ScopedThreads, num_threads)?
        .render_mandelbrot(viewport, max_iterations)
}
