use std::error::Error;
use std::fmt;

use crate::core::actions::render_frame::errors::RenderError;
use crate::core::fractals::mandelbrot::mandelbrot_config::ConfigError;
use crate::core::zoom::errors::ZoomError;

#[derive(Debug)]
pub enum ExplorerError {
    Config(ConfigError),
    Render(RenderError),
    Zoom(ZoomError),
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "explorer configuration error: {}", err),
            Self::Render(err) => write!(f, "frame render failed: {}", err),
            Self::Zoom(err) => write!(f, "zoom failed: {}", err),
        }
    }
}

impl Error for ExplorerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::Zoom(err) => Some(err),
        }
    }
}

impl From<ConfigError> for ExplorerError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<RenderError> for ExplorerError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

impl From<ZoomError> for ExplorerError {
    fn from(err: ZoomError) -> Self {
        Self::Zoom(err)
    }
}
