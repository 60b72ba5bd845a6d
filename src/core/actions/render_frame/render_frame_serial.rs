use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::colour::Rgba;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::point::Point;

/// Fills `frame` row by row on the calling thread.
pub fn render_frame_serial<Alg, CMap>(frame: &mut FrameBuffer, algorithm: &Alg, colour_map: &CMap)
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Sample>,
{
    for (y, row) in frame.rows_mut().enumerate() {
        render_row(y, row, algorithm, colour_map);
    }
}

/// Samples and colours a single row. Rows are independent, so any number of
/// them may be rendered concurrently as long as each slice has one writer.
pub(crate) fn render_row<Alg, CMap>(y: usize, row: &mut [Rgba], algorithm: &Alg, colour_map: &CMap)
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Sample>,
{
    let y = y as i32;

    for (x, pixel) in row.iter_mut().enumerate() {
        let sample = algorithm.compute(Point { x: x as i32, y });
        *pixel = colour_map.map(sample);
    }
}
