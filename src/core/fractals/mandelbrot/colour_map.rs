use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

const RED_WEIGHT: u32 = 8;
const GREEN_WEIGHT: u32 = 4;
const BLUE_WEIGHT: u32 = 2;

fn banded_channel(iterations: u32, weight: u32) -> u8 {
    iterations.saturating_mul(weight).min(u32::from(u8::MAX)) as u8
}

/// Linear bands that saturate channel by channel: red at 32 iterations,
/// green at 64, blue at 128. Bounded points therefore come out white
/// whenever the iteration cap is 128 or more.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotBandedColourMap;

impl ColourMap<u32> for MandelbrotBandedColourMap {
    fn map(&self, iterations: u32) -> Colour {
        Colour {
            r: banded_channel(iterations, RED_WEIGHT),
            g: banded_channel(iterations, GREEN_WEIGHT),
            b: banded_channel(iterations, BLUE_WEIGHT),
        }
    }

    fn display_name(&self) -> &str {
        "Banded"
    }
}
