use std::error::Error;

use log::{info, warn};

use crate::controllers::explorer::{ExplorerError, ExplorerSession};
use crate::core::zoom::errors::ZoomError;
use crate::core::zoom::input_event::InputEvent;
use crate::input::cli::args::CliArgs;
use crate::presenters::log::presenter::LogPresenter;

/// Renders the starting view, then one frame per replayed click.
///
/// Clicks outside the image are skipped; any other failure ends the run.
/// Returns the number of frames rendered.
pub fn run_cli(args: &CliArgs) -> Result<u64, Box<dyn Error>> {
    let config = args.config();
    let mut session = ExplorerSession::new(&config, LogPresenter::new())?;

    session.render_frame()?;

    for &position in &args.clicks {
        match session.handle_input(InputEvent::PrimaryButtonPressed { position }) {
            Ok(_) => {}
            Err(ExplorerError::Zoom(ZoomError::ClickOutsideImage(err))) => {
                warn!("skipping click: {}", err);
            }
            Err(err) => return Err(err.into()),
        }
    }

    let presenter = session.presenter();
    info!(
        "done: {} frames, {} bytes presented",
        presenter.frames_presented(),
        presenter.bytes_presented()
    );

    Ok(session.frames_rendered())
}
