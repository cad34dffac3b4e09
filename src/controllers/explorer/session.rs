use std::time::Instant;

use log::{info, warn};

use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::errors::ExplorerError;
use crate::controllers::explorer::ports::frame_presenter::FramePresenterPort;
use crate::core::actions::render_frame::frame_renderer::FrameRenderer;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::zoom::controller::ZoomController;
use crate::core::zoom::input_event::InputEvent;

/// Drives the render, present, advance cycle for one explorer window.
///
/// Frames are rendered synchronously on the caller's thread (which blocks
/// on the render workers), so input cannot interleave with a frame.
///
/// Clicks made while frame `n` is on screen zoom with
/// `initial_scale / divisor^n`: the scale only shrinks once that frame is
/// replaced by the next one.
pub struct ExplorerSession<P: FramePresenterPort> {
    controller: ZoomController,
    renderer: FrameRenderer,
    presenter: P,
    frames_rendered: u64,
}

impl<P: FramePresenterPort> ExplorerSession<P> {
    pub fn new(config: &MandelbrotConfig, presenter: P) -> Result<Self, ExplorerError> {
        let controller = ZoomController::new(config.initial_zoom_state()?);
        let renderer = FrameRenderer::new(config.strategy, config.num_threads)?;

        info!(
            "explorer session: {}x{}, {} iterations, {} threads ({})",
            config.width,
            config.height,
            config.max_iterations,
            renderer.num_threads(),
            renderer.strategy()
        );

        Ok(Self {
            controller,
            renderer,
            presenter,
            frames_rendered: 0,
        })
    }

    /// Renders the current viewport and hands it to the presenter.
    ///
    /// The frame on screen until now is complete once its successor is
    /// rendered, so from the second frame on this also shrinks the zoom
    /// scale. A failed render leaves the scale alone.
    pub fn render_frame(&mut self) -> Result<(), ExplorerError> {
        let state = *self.controller.state();
        let viewport = state.viewport();

        let start = Instant::now();
        let pixel_buffer = self
            .renderer
            .render_mandelbrot(&viewport, state.max_iterations())?;
        let render_duration = start.elapsed();

        if self.frames_rendered > 0 {
            self.controller.advance_scale();
        }

        let frame = FrameData {
            frame_index: self.frames_rendered,
            viewport,
            scale: self.controller.state().scale(),
            render_duration,
            pixel_buffer,
        };

        info!(
            "frame {} rendered in {:?}",
            frame.frame_index, frame.render_duration
        );

        self.presenter.present(&frame);
        self.frames_rendered += 1;

        Ok(())
    }

    /// Applies `event`; if it zoomed, renders the new view.
    ///
    /// Returns whether a frame was rendered. A rejected click is logged and
    /// returned as an error with the view unchanged.
    pub fn handle_input(&mut self, event: InputEvent) -> Result<bool, ExplorerError> {
        match self.controller.handle_event(event) {
            Ok(Some(_)) => {
                self.render_frame()?;
                Ok(true)
            }
            Ok(None) => Ok(false),
            Err(err) => {
                warn!("ignoring {:?}: {}", event, err);
                Err(err.into())
            }
        }
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    #[must_use]
    pub fn controller(&self) -> &ZoomController {
        &self.controller
    }

    #[must_use]
    pub fn renderer(&self) -> &FrameRenderer {
        &self.renderer
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_frame::frame_renderer::RenderStrategy;
    use crate::core::data::point::Point;
    use crate::core::data::viewport::Viewport;
    use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotPreset;
    use crate::core::zoom::errors::ZoomError;

    const EPSILON: f64 = 1e-12;

    #[derive(Default)]
    struct RecordingPresenter {
        frames: Vec<(u64, Viewport, f64, usize)>,
    }

    impl FramePresenterPort for RecordingPresenter {
        fn present(&mut self, frame: &FrameData) {
            self.frames.push((
                frame.frame_index,
                frame.viewport,
                frame.scale,
                frame.pixel_buffer.buffer_size(),
            ));
        }
    }

    fn small_config(preset: MandelbrotPreset) -> MandelbrotConfig {
        MandelbrotConfig {
            width: 80,
            height: 80,
            num_threads: 4,
            strategy: RenderStrategy::ScopedThreads,
            ..MandelbrotConfig::from_preset(preset)
        }
    }

    fn session(preset: MandelbrotPreset) -> ExplorerSession<RecordingPresenter> {
        ExplorerSession::new(&small_config(preset), RecordingPresenter::default()).unwrap()
    }

    #[test]
    fn test_first_frame_keeps_initial_scale() {
        let mut session = session(MandelbrotPreset::Classic);

        session.render_frame().unwrap();

        let (index, _, scale, size) = session.presenter().frames[0];
        assert_eq!(index, 0);
        assert_eq!(scale, 1.0);
        assert_eq!(size, 80 * 80 * 3);
        assert_eq!(session.controller().state().scale(), 1.0);
        assert_eq!(session.frames_rendered(), 1);
    }

    #[test]
    fn test_first_click_on_initial_frame_uses_initial_scale() {
        let config = MandelbrotConfig {
            num_threads: 4,
            strategy: RenderStrategy::ScopedThreads,
            ..MandelbrotConfig::from_preset(MandelbrotPreset::Threaded)
        };
        let mut session = ExplorerSession::new(&config, RecordingPresenter::default()).unwrap();
        session.render_frame().unwrap();

        session
            .handle_input(InputEvent::PrimaryButtonPressed {
                position: Point { x: 400, y: 400 },
            })
            .unwrap();

        let viewport = session.controller().viewport();
        assert!((viewport.min_x() - -0.95).abs() < EPSILON);
        assert!((viewport.max_x() - -0.55).abs() < EPSILON);
        assert!((viewport.min_y() - -0.2).abs() < EPSILON);
        assert!((viewport.max_y() - 0.2).abs() < EPSILON);
    }

    #[test]
    fn test_scale_shrinks_once_per_replaced_frame() {
        let mut session = session(MandelbrotPreset::Classic);
        session.render_frame().unwrap();

        let centre = InputEvent::PrimaryButtonPressed {
            position: Point { x: 40, y: 40 },
        };
        assert!(session.handle_input(centre).unwrap());

        // first click zoomed with 1.0, frame 1 is displayed with 0.2
        let (index, viewport, scale, _) = session.presenter().frames[1];
        assert_eq!(index, 1);
        assert!((scale - 0.2).abs() < EPSILON);
        assert!((viewport.min_x() - -1.75).abs() < EPSILON);
        assert!((viewport.max_x() - 0.25).abs() < EPSILON);

        assert!(session.handle_input(centre).unwrap());

        let (index, viewport, scale, _) = session.presenter().frames[2];
        assert_eq!(index, 2);
        assert!((scale - 0.04).abs() < EPSILON);
        assert!((viewport.min_x() - -0.95).abs() < EPSILON);
        assert!((viewport.max_x() - -0.55).abs() < EPSILON);
        assert!((viewport.min_y() - -0.2).abs() < EPSILON);
        assert!((viewport.max_y() - 0.2).abs() < EPSILON);
        assert_eq!(session.controller().frames_completed(), 2);
    }

    #[test]
    fn test_non_click_events_do_not_render() {
        let mut session = session(MandelbrotPreset::Threaded);

        let rendered = session
            .handle_input(InputEvent::CursorMoved {
                position: Point { x: 3, y: 3 },
            })
            .unwrap();

        assert!(!rendered);
        assert!(session.presenter().frames.is_empty());
    }

    #[test]
    fn test_click_outside_image_is_reported() {
        let mut session = session(MandelbrotPreset::Threaded);

        let result = session.handle_input(InputEvent::PrimaryButtonPressed {
            position: Point { x: 80, y: 0 },
        });

        assert!(matches!(
            result,
            Err(ExplorerError::Zoom(ZoomError::ClickOutsideImage(_)))
        ));
        assert!(session.presenter().frames.is_empty());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = MandelbrotConfig {
            num_threads: 0,
            ..small_config(MandelbrotPreset::Threaded)
        };

        assert!(matches!(
            ExplorerSession::new(&config, RecordingPresenter::default()),
            Err(ExplorerError::Render(_))
        ));
    }
}
