mod controllers;
mod core;
mod input;
mod presenters;

pub use crate::controllers::explorer::{ExplorerError, ExplorerSession, FrameData, FramePresenterPort};
pub use crate::core::actions::render_frame::errors::RenderError;
pub use crate::core::actions::render_frame::frame_renderer::{FrameRenderer, RenderStrategy, render_mandelbrot};
pub use crate::core::actions::render_frame::ports::colour_map::ColourMap;
pub use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, escape_count};
pub use crate::core::fractals::mandelbrot::colour_map::MandelbrotBandedColourMap;
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{
    ConfigError, MandelbrotConfig, MandelbrotPreset,
};
pub use crate::core::util::pixel_to_complex_coords::{PixelToComplexCoordsError, pixel_to_complex_coords};
pub use crate::core::util::stride_row_partition::{row_owner, stride_rows};
pub use crate::core::zoom::controller::ZoomController;
pub use crate::core::zoom::errors::ZoomError;
pub use crate::core::zoom::input_event::InputEvent;
pub use crate::core::zoom::zoom_state::{DEFAULT_ZOOM_DIVISOR, ZoomState};
pub use crate::input::cli::{CliArgs, PresetArg, StrategyArg, run_cli};
pub use crate::presenters::log::presenter::LogPresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::run_gui;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::presenter::PixelsPresenter;
