//! Command-line harness: options shared by both binaries, plus a headless
//! run that replays a list of clicks.

mod args;
mod run;

pub use args::{CliArgs, PresetArg, StrategyArg};
pub use run::run_cli;
