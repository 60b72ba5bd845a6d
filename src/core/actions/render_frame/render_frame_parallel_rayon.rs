use rayon::prelude::*;

use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_frame::render_frame_serial::render_row;
use crate::core::data::frame_buffer::FrameBuffer;

/// Fills `frame` using rayon's work-stealing scheduler.
///
/// The buffer is split into write-disjoint rows and each row is handed to
/// one worker. Returns only after every row is written, so the caller never
/// observes a partial frame. Output is identical to
/// [`render_frame_serial`](super::render_frame_serial::render_frame_serial).
pub fn render_frame_parallel_rayon<Alg, CMap>(
    frame: &mut FrameBuffer,
    algorithm: &Alg,
    colour_map: &CMap,
) where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Sample> + Sync,
{
    let width = frame.width() as usize;

    frame
        .pixels_mut()
        .par_chunks_exact_mut(width)
        .enumerate()
        .for_each(|(y, row)| render_row(y, row, algorithm, colour_map));
}
