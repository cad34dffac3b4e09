use log::{debug, info};

use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::zoom::errors::ZoomError;
use crate::core::zoom::input_event::InputEvent;
use crate::core::zoom::zoom_state::ZoomState;

/// Owns the explorer's [`ZoomState`] for a session.
///
/// The controller is idle between calls. A click is applied entirely inside
/// [`ZoomController::on_click`], which needs `&mut self`, so nothing can
/// observe a half-applied transition or move the view while a frame that
/// borrowed the current viewport is rendering.
#[derive(Debug, Clone)]
pub struct ZoomController {
    state: ZoomState,
    frames_completed: u64,
}

impl ZoomController {
    #[must_use]
    pub fn new(state: ZoomState) -> Self {
        Self {
            state,
            frames_completed: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ZoomState {
        &self.state
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.state.viewport()
    }

    #[must_use]
    pub fn frames_completed(&self) -> u64 {
        self.frames_completed
    }

    pub fn on_click(&mut self, position: Point) -> Result<Viewport, ZoomError> {
        self.state = self.state.zoomed_at(position)?;

        let viewport = self.state.viewport();
        let centre = viewport.region().centre();
        info!(
            "zoomed at ({}, {}) onto {} {:+}i: real [{}, {}], imag [{}, {}]",
            position.x,
            position.y,
            centre.re,
            centre.im,
            viewport.min_x(),
            viewport.max_x(),
            viewport.min_y(),
            viewport.max_y()
        );

        Ok(viewport)
    }

    /// Applies a harness event. Only a primary-button press zooms; every
    /// other event is a no-op returning `Ok(None)`.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<Option<Viewport>, ZoomError> {
        match event {
            InputEvent::PrimaryButtonPressed { position } => self.on_click(position).map(Some),
            _ => Ok(None),
        }
    }

    /// Call once per completed frame, i.e. once the frame on screen has been
    /// replaced. Returns the new scale.
    pub fn advance_scale(&mut self) -> f64 {
        self.state = self.state.with_advanced_scale();
        self.frames_completed += 1;

        debug!(
            "frame {} complete, next zoom scale {}",
            self.frames_completed,
            self.state.scale()
        );

        self.state.scale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::zoom::zoom_state::DEFAULT_ZOOM_DIVISOR;

    const EPSILON: f64 = 1e-12;

    fn controller(scale: f64) -> ZoomController {
        let viewport = Viewport::new(
            ComplexRect::new(Complex::new(-2.0, -1.25), Complex::new(0.5, 1.25)).unwrap(),
            PixelRect::new(800, 800).unwrap(),
        )
        .unwrap();

        ZoomController::new(ZoomState::new(viewport, scale, 100, DEFAULT_ZOOM_DIVISOR).unwrap())
    }

    #[test]
    fn test_primary_press_zooms() {
        let mut controller = controller(0.2);
        let viewport = controller
            .handle_event(InputEvent::PrimaryButtonPressed {
                position: Point { x: 400, y: 400 },
            })
            .unwrap()
            .unwrap();

        assert!((viewport.min_x() - -0.95).abs() < EPSILON);
        assert_eq!(controller.viewport(), viewport);
    }

    #[test]
    fn test_other_events_are_ignored() {
        let mut controller = controller(0.2);
        let before = *controller.state();
        let position = Point { x: 10, y: 10 };

        for event in [
            InputEvent::PrimaryButtonReleased { position },
            InputEvent::SecondaryButtonPressed { position },
            InputEvent::CursorMoved { position },
        ] {
            assert_eq!(controller.handle_event(event), Ok(None));
        }

        assert_eq!(*controller.state(), before);
    }

    #[test]
    fn test_click_before_first_frame_uses_initial_scale() {
        let mut controller = controller(1.0);
        let viewport = controller.on_click(Point { x: 400, y: 400 }).unwrap();

        assert!((viewport.max_x() - viewport.min_x() - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_click_does_not_change_scale() {
        let mut controller = controller(1.0);
        controller.on_click(Point { x: 100, y: 100 }).unwrap();

        assert_eq!(controller.state().scale(), 1.0);
        assert_eq!(controller.frames_completed(), 0);
    }

    #[test]
    fn test_scale_after_three_frames() {
        let mut controller = controller(1.0);
        controller.advance_scale();
        controller.advance_scale();
        let scale = controller.advance_scale();

        assert!((scale - 0.008).abs() < EPSILON);
        assert_eq!(controller.frames_completed(), 3);
    }

    #[test]
    fn test_rejected_click_leaves_state_untouched() {
        let mut controller = controller(0.2);
        let before = *controller.state();

        assert!(controller.on_click(Point { x: -1, y: 400 }).is_err());
        assert_eq!(*controller.state(), before);
    }

    #[test]
    fn test_successive_zooms_compose() {
        let mut controller = controller(1.0);
        controller.on_click(Point { x: 400, y: 400 }).unwrap();
        controller.advance_scale();
        let viewport = controller.on_click(Point { x: 400, y: 400 }).unwrap();

        // second click lands on the centre of the first zoom window
        let centre = viewport.region().centre();
        assert!((centre.re - -0.75).abs() < 1e-9);
        assert!(centre.im.abs() < 1e-9);
        assert!((viewport.max_x() - viewport.min_x() - 0.4).abs() < EPSILON);
    }
}
