use std::error::Error;
use std::fmt;

use crate::core::actions::render_frame::frame_renderer::RenderStrategy;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::util::calculate_worker_threads::available_threads;
use crate::core::zoom::errors::ZoomError;
use crate::core::zoom::zoom_state::{DEFAULT_ZOOM_DIVISOR, ZoomState};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 800;

const THREADED_MAX_ITERATIONS: u32 = 500;
const THREADED_INITIAL_SCALE: f64 = 0.2;
const CLASSIC_MAX_ITERATIONS: u32 = 100;
const CLASSIC_INITIAL_SCALE: f64 = 1.0;

pub(crate) fn default_region_bounds() -> (Complex, Complex) {
    (Complex::new(-2.0, -1.25), Complex::new(0.5, 1.25))
}

/// Starting parameter sets for the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MandelbrotPreset {
    /// Deep iteration with a tight first zoom.
    #[default]
    Threaded,
    /// Shallow iteration, first click zooms to a 2x2 window.
    Classic,
}

impl fmt::Display for MandelbrotPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Threaded => write!(f, "threaded"),
            Self::Classic => write!(f, "classic"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    PixelRect(PixelRectError),
    Region(ComplexRectError),
    Viewport(ViewportError),
    Zoom(ZoomError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelRect(err) => write!(f, "invalid image size: {}", err),
            Self::Region(err) => write!(f, "invalid starting region: {}", err),
            Self::Viewport(err) => write!(f, "invalid starting viewport: {}", err),
            Self::Zoom(err) => write!(f, "invalid zoom settings: {}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelRect(err) => Some(err),
            Self::Region(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::Zoom(err) => Some(err),
        }
    }
}

impl From<PixelRectError> for ConfigError {
    fn from(err: PixelRectError) -> Self {
        Self::PixelRect(err)
    }
}

impl From<ComplexRectError> for ConfigError {
    fn from(err: ComplexRectError) -> Self {
        Self::Region(err)
    }
}

impl From<ViewportError> for ConfigError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<ZoomError> for ConfigError {
    fn from(err: ZoomError) -> Self {
        Self::Zoom(err)
    }
}

/// Everything needed to start an explorer session.
///
/// Fields are plain values so the CLI can override them one by one;
/// validation happens in [`MandelbrotConfig::initial_zoom_state`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub width: u32,
    pub height: u32,
    pub region_min: Complex,
    pub region_max: Complex,
    pub max_iterations: u32,
    pub initial_scale: f64,
    pub zoom_divisor: f64,
    pub num_threads: u32,
    pub strategy: RenderStrategy,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self::from_preset(MandelbrotPreset::default())
    }
}

impl MandelbrotConfig {
    #[must_use]
    pub fn from_preset(preset: MandelbrotPreset) -> Self {
        let (max_iterations, initial_scale) = match preset {
            MandelbrotPreset::Threaded => (THREADED_MAX_ITERATIONS, THREADED_INITIAL_SCALE),
            MandelbrotPreset::Classic => (CLASSIC_MAX_ITERATIONS, CLASSIC_INITIAL_SCALE),
        };
        let (region_min, region_max) = default_region_bounds();

        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            region_min,
            region_max,
            max_iterations,
            initial_scale,
            zoom_divisor: DEFAULT_ZOOM_DIVISOR,
            num_threads: available_threads().get(),
            strategy: RenderStrategy::default(),
        }
    }

    pub fn pixel_rect(&self) -> Result<PixelRect, ConfigError> {
        Ok(PixelRect::new(self.width, self.height)?)
    }

    pub fn initial_viewport(&self) -> Result<Viewport, ConfigError> {
        let region = ComplexRect::new(self.region_min, self.region_max)?;

        Ok(Viewport::new(region, self.pixel_rect()?)?)
    }

    pub fn initial_zoom_state(&self) -> Result<ZoomState, ConfigError> {
        Ok(ZoomState::new(
            self.initial_viewport()?,
            self.initial_scale,
            self.max_iterations,
            self.zoom_divisor,
        )?)
    }
}
