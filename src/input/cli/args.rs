use clap::{Parser, ValueEnum};

use crate::core::actions::render_frame::frame_renderer::RenderStrategy;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::mandelbrot_config::{MandelbrotConfig, MandelbrotPreset};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PresetArg {
    /// 500 iterations, first zoom to a 0.4 wide window
    #[default]
    Threaded,
    /// 100 iterations, first zoom to a 2.0 wide window
    Classic,
}

impl From<PresetArg> for MandelbrotPreset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Threaded => Self::Threaded,
            PresetArg::Classic => Self::Classic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StrategyArg {
    /// Spawn fresh threads for every frame
    Scoped,
    /// Reuse a rayon pool across frames
    #[default]
    Pool,
}

impl From<StrategyArg> for RenderStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Scoped => Self::ScopedThreads,
            StrategyArg::Pool => Self::WorkerPool,
        }
    }
}

/// Interactive Mandelbrot zoom explorer.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct CliArgs {
    /// Starting parameter set
    #[arg(long, value_enum, default_value_t = PresetArg::Threaded)]
    pub preset: PresetArg,

    /// Render worker threads (defaults to available parallelism)
    #[arg(short = 't', long)]
    pub threads: Option<u32>,

    /// Override the preset's iteration cap
    #[arg(short = 'i', long)]
    pub max_iterations: Option<u32>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// How render workers are scheduled
    #[arg(long, value_enum, default_value_t = StrategyArg::Pool)]
    pub strategy: StrategyArg,

    /// Click to replay after the first frame, as X,Y. Repeatable.
    #[arg(long = "click", value_name = "X,Y", value_parser = parse_click)]
    pub clicks: Vec<Point>,
}

impl CliArgs {
    /// Preset values with any explicit overrides applied.
    #[must_use]
    pub fn config(&self) -> MandelbrotConfig {
        let preset = MandelbrotConfig::from_preset(self.preset.into());

        MandelbrotConfig {
            width: self.width.unwrap_or(preset.width),
            height: self.height.unwrap_or(preset.height),
            max_iterations: self.max_iterations.unwrap_or(preset.max_iterations),
            num_threads: self.threads.unwrap_or(preset.num_threads),
            strategy: self.strategy.into(),
            ..preset
        }
    }
}

fn parse_click(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))?;

    let parse = |part: &str| {
        part.trim()
            .parse::<i32>()
            .map_err(|err| format!("invalid coordinate '{part}': {err}"))
    };

    Ok(Point::new(parse(x)?, parse(y)?))
}
