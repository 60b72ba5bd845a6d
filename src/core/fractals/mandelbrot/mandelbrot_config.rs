use crate::core::actions::render_frame::render_frame::{RenderMode, RenderOptions};
use crate::core::data::colour::Rgba;
use crate::core::data::view_state::{DEFAULT_BASE_COLOUR, DEFAULT_MAX_ITERATIONS, ViewState};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Start-up parameters for an explorer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotConfig {
    pub max_iterations: u32,
    pub base_colour: Rgba,
    pub debug_axes: bool,
    pub render_mode: RenderMode,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            base_colour: DEFAULT_BASE_COLOUR,
            debug_axes: false,
            render_mode: RenderMode::default(),
        }
    }
}

impl MandelbrotConfig {
    pub fn new(
        max_iterations: u32,
        base_colour: Rgba,
        debug_axes: bool,
        render_mode: RenderMode,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self {
            max_iterations,
            base_colour,
            debug_axes,
            render_mode,
        })
    }

    pub fn initial_view_state(&self) -> Result<ViewState, MandelbrotError> {
        ViewState::new(self.max_iterations, self.base_colour)
    }

    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            mode: self.render_mode,
            debug_axes: self.debug_axes,
        }
    }
}
