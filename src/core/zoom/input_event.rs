use crate::core::data::point::Point;

/// Pointer input forwarded by a display harness, in image pixel
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PrimaryButtonPressed { position: Point },
    PrimaryButtonReleased { position: Point },
    SecondaryButtonPressed { position: Point },
    CursorMoved { position: Point },
}
