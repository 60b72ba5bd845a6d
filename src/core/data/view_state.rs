use crate::core::data::colour::Rgba;
use crate::core::data::complex::Complex;
use crate::core::data::plane_bounds::PlaneBounds;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::view_relative_coords;
use std::num::NonZeroU32;

pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;
pub const DEFAULT_BASE_COLOUR: Rgba = Rgba(0xAAAA_AAFF);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomStepDirection {
    Up,
    Down,
}

/// Zoom, pan and colouring parameters of the explorer.
///
/// Fields are private so every change goes through one of the named
/// operations below, which keep `zoom`, `zoom_step` and `max_iterations`
/// at or above one.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    zoom: u64,
    zoom_step: u64,
    pan_offset: Complex,
    max_iterations: u32,
    base_colour: Rgba,
    scroll_remainder: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1,
            zoom_step: 1,
            pan_offset: Complex::ZERO,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            base_colour: DEFAULT_BASE_COLOUR,
            scroll_remainder: 0.0,
        }
    }
}

impl ViewState {
    pub fn new(max_iterations: u32, base_colour: Rgba) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self {
            max_iterations,
            base_colour,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn zoom(&self) -> u64 {
        self.zoom
    }

    #[must_use]
    pub fn zoom_step(&self) -> u64 {
        self.zoom_step
    }

    #[must_use]
    pub fn pan_offset(&self) -> Complex {
        self.pan_offset
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn base_colour(&self) -> Rgba {
        self.base_colour
    }

    /// Applies one scroll. Positive deltas zoom out, negative zoom in, each
    /// whole unit moving the zoom by `zoom_step`. Fractions carry over to the
    /// next scroll. Never drops below native scale.
    pub fn zoom_in_out(&mut self, scroll_delta: f32) {
        if !scroll_delta.is_finite() {
            return;
        }

        self.scroll_remainder += f64::from(scroll_delta);
        let notches = self.scroll_remainder.trunc();
        self.scroll_remainder -= notches;

        if notches != 0.0 {
            let zoom = self.zoom as f64 - self.zoom_step as f64 * notches;
            self.zoom = zoom.max(1.0) as u64;
        }
    }

    pub fn adjust_zoom_step(&mut self, direction: ZoomStepDirection) {
        self.zoom_step = match direction {
            ZoomStepDirection::Up => self.zoom_step.saturating_mul(2),
            ZoomStepDirection::Down => (self.zoom_step / 2).max(1),
        };
    }

    /// Shifts the view by the plane position under `screen`, as seen without
    /// the current offset. Repeated pans accumulate.
    pub fn pan(&mut self, screen: Point, viewport: Viewport, bounds: PlaneBounds) {
        let pixel = viewport.screen_to_viewport(screen);
        self.pan_offset += view_relative_coords(pixel, viewport, bounds, self.zoom);
    }

    /// Replaces the colouring parameters together.
    pub fn set_colour_and_iterations(&mut self, base_colour: Rgba, max_iterations: NonZeroU32) {
        self.base_colour = base_colour;
        self.max_iterations = max_iterations.get();
    }

    /// Restores zoom, zoom step, pan offset and iteration count. The base
    /// colour is kept.
    pub fn reset(&mut self) {
        self.zoom = 1;
        self.zoom_step = 1;
        self.pan_offset = Complex::ZERO;
        self.max_iterations = DEFAULT_MAX_ITERATIONS;
        self.scroll_remainder = 0.0;
    }
}
