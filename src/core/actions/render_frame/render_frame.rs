use crate::core::actions::render_frame::render_frame_parallel_rayon::render_frame_parallel_rayon;
use crate::core::actions::render_frame::render_frame_serial::render_frame_serial;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::plane_bounds::PlaneBounds;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::BitShiftColourMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    Serial,
    #[default]
    Parallel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub mode: RenderMode,
    pub debug_axes: bool,
}

/// Samples and colours every pixel of `viewport` for the current view.
///
/// Both render modes produce the same buffer.
#[must_use]
pub fn render_frame(
    view_state: &ViewState,
    viewport: Viewport,
    bounds: PlaneBounds,
    options: RenderOptions,
) -> FrameBuffer {
    let algorithm = MandelbrotAlgorithm::new(view_state, viewport, bounds, options.debug_axes);
    let colour_map = BitShiftColourMap::new(view_state.base_colour(), view_state.max_iterations());
    let mut frame = FrameBuffer::new(viewport);

    match options.mode {
        RenderMode::Serial => render_frame_serial(&mut frame, &algorithm, &colour_map),
        RenderMode::Parallel => render_frame_parallel_rayon(&mut frame, &algorithm, &colour_map),
    }

    frame
}
