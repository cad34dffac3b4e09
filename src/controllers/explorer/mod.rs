//! Explorer session: the application layer between input, the zoom
//! controller, the frame renderer and whatever displays the frames.
//!
//! - **Input**: [`InputEvent`](crate::core::zoom::input_event::InputEvent)s
//!   from a harness (GUI window, CLI click list)
//! - **Output**: [`FramePresenterPort`] receiving each finished frame
//! - **Core**: zoom state and parallel rendering from `core/`

pub mod data;
pub mod errors;
pub mod ports;
mod session;

pub use data::frame_data::FrameData;
pub use errors::ExplorerError;
pub use ports::frame_presenter::FramePresenterPort;
pub use session::ExplorerSession;
