use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;
use crate::core::data::viewport::Viewport;

/// Fills one image row. The real part walks `x_step` from `min_x` as a
/// running sum; every row walks the same sequence, so a column gets the
/// same real part whichever worker renders it.
pub(crate) fn render_row<Alg, CMap>(
    row: &mut [u8],
    y: u32,
    viewport: &Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
) where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    let im = viewport.imag_at(y);
    let x_step = viewport.x_step();
    let mut re = viewport.min_x();

    for pixel in row.chunks_exact_mut(BYTES_PER_PIXEL) {
        let colour = colour_map.map(algorithm.compute(Complex { re, im }));
        pixel.copy_from_slice(&colour.to_rgb());
        re += x_step;
    }
}

/// Body of one render worker: every row it was assigned, in order.
pub(crate) fn render_worker_rows<Alg, CMap>(
    rows: Vec<(u32, &mut [u8])>,
    viewport: &Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
) where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    for (y, row) in rows {
        render_row(row, y, viewport, algorithm, colour_map);
    }
}
