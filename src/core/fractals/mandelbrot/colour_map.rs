use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Rgba;
use crate::core::fractals::mandelbrot::algorithm::EscapeSample;

/// Colour for a pixel that escaped after `iterations` steps.
///
/// Points that reached `max_iterations` are [`Rgba::TRANSPARENT`]. Anything
/// else is `base_colour` shifted right by `iterations` as a signed 32-bit
/// value: the sign bit is replicated, and the shift count wraps modulo 32,
/// so the palette repeats every 32 iterations.
#[must_use]
pub fn color_for(iterations: u32, max_iterations: u32, base_colour: Rgba) -> Rgba {
    if iterations >= max_iterations {
        return Rgba::TRANSPARENT;
    }

    Rgba((base_colour.0 as i32).wrapping_shr(iterations) as u32)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitShiftColourMap {
    base_colour: Rgba,
    max_iterations: u32,
}

impl BitShiftColourMap {
    #[must_use]
    pub fn new(base_colour: Rgba, max_iterations: u32) -> Self {
        Self {
            base_colour,
            max_iterations,
        }
    }
}

impl ColourMap<EscapeSample> for BitShiftColourMap {
    fn map(&self, value: EscapeSample) -> Rgba {
        match value {
            EscapeSample::Iterations(iterations) => {
                color_for(iterations, self.max_iterations, self.base_colour)
            }
            EscapeSample::AxisMarker => Rgba::AXIS_MARKER,
        }
    }
}
