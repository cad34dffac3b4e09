//! Output port of the explorer session: where finished frames go.

pub mod frame_presenter;
