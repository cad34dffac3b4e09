//! Main GUI application loop.

use std::error::Error;

use log::{debug, error, info};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent},
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::{Window, WindowBuilder},
};

use crate::controllers::explorer::ExplorerSession;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::zoom::input_event::InputEvent;
use crate::presenters::pixels::presenter::PixelsPresenter;

/// Translates a winit mouse button change into a harness event.
fn mouse_event(button: MouseButton, state: ElementState, position: Point) -> Option<InputEvent> {
    match (button, state) {
        (MouseButton::Left, ElementState::Pressed) => {
            Some(InputEvent::PrimaryButtonPressed { position })
        }
        (MouseButton::Left, ElementState::Released) => {
            Some(InputEvent::PrimaryButtonReleased { position })
        }
        (MouseButton::Right, ElementState::Pressed) => {
            Some(InputEvent::SecondaryButtonPressed { position })
        }
        _ => None,
    }
}

fn is_quit_key(event: &KeyEvent) -> bool {
    if event.state != ElementState::Pressed {
        return false;
    }

    match &event.logical_key {
        Key::Named(NamedKey::Escape) => true,
        Key::Character(c) => c.as_str().eq_ignore_ascii_case("q"),
        _ => false,
    }
}

/// Runs the GUI application.
///
/// Renders the initial view, then re-renders after every accepted click.
/// Does not return until the window is closed.
pub fn run_gui(config: MandelbrotConfig) -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoop::new()?;

    // pixels needs a 'static window
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Explorer")
            .with_inner_size(LogicalSize::new(
                f64::from(config.width),
                f64::from(config.height),
            ))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let presenter = PixelsPresenter::new(window, config.width, config.height)?;
    let mut session = ExplorerSession::new(&config, presenter)?;
    session.render_frame()?;

    let mut cursor = Point::default();

    event_loop.run(move |event, elwt| {
        let Event::WindowEvent { event, window_id } = event else {
            return;
        };

        if window_id != window.id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput { event, .. } if is_quit_key(&event) => {
                info!("quit requested after {} frames", session.frames_rendered());
                elwt.exit();
            }
            WindowEvent::CursorMoved { position, .. } => {
                cursor = session
                    .presenter()
                    .window_to_image((position.x, position.y));
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let Some(input) = mouse_event(button, state, cursor) else {
                    return;
                };

                match session.handle_input(input) {
                    Ok(true) => window.request_redraw(),
                    Ok(false) => {}
                    Err(err) => debug!("input not applied: {}", err),
                }
            }
            WindowEvent::Resized(size) => {
                session.presenter_mut().resize(size.width, size.height);
                window.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = session.presenter().render() {
                    error!("surface render failed: {}", err);
                    elwt.exit();
                }
            }
            _ => {}
        }
    })?;

    Ok(())
}
