use std::error::Error;
use std::fmt;
use std::io;

use rayon::ThreadPoolBuildError;

use crate::core::fractals::mandelbrot::errors::MandelbrotError;

#[derive(Debug)]
pub enum RenderError {
    ZeroThreads,
    Algorithm(MandelbrotError),
    Spawn(io::Error),
    ThreadPool(ThreadPoolBuildError),
    /// A worker panicked. The frame is discarded.
    WorkerPanicked,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroThreads => write!(f, "render needs at least one worker thread"),
            Self::Algorithm(err) => write!(f, "fractal algorithm error: {}", err),
            Self::Spawn(err) => write!(f, "failed to spawn render worker: {}", err),
            Self::ThreadPool(err) => write!(f, "failed to build render thread pool: {}", err),
            Self::WorkerPanicked => write!(f, "render worker panicked, frame discarded"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) => Some(err),
            Self::Spawn(err) => Some(err),
            Self::ThreadPool(err) => Some(err),
            Self::ZeroThreads | Self::WorkerPanicked => None,
        }
    }
}

impl From<MandelbrotError> for RenderError {
    fn from(err: MandelbrotError) -> Self {
        Self::Algorithm(err)
    }
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        Self::Spawn(err)
    }
}

impl From<ThreadPoolBuildError> for RenderError {
    fn from(err: ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err)
    }
}
