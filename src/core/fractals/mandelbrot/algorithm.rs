use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::plane_bounds::PlaneBounds;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::view_relative_coords;

pub const ESCAPE_RADIUS: f64 = 2.0;

/// Number of iterations of `z = z*z + c` from `z = 0` before `|z|` exceeds
/// [`ESCAPE_RADIUS`], or `max_iterations` if it never does.
///
/// Non-finite input never faults. NaN never compares greater than the
/// radius and so runs to `max_iterations`; infinities escape on the first
/// test after `z` takes the value of `c`.
#[must_use]
pub fn escape_iterations(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude() > ESCAPE_RADIUS {
            return iteration;
        }
        z = z * z + c;
    }

    max_iterations
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeSample {
    Iterations(u32),
    /// The pixel lies on a view-relative axis and the overlay is enabled.
    AxisMarker,
}

/// Escape-time sampler for one frame. Captures the view parameters at
/// construction so a sweep sees a consistent snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    bounds: PlaneBounds,
    zoom: u64,
    pan_offset: Complex,
    max_iterations: u32,
    debug_axes: bool,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(
        view_state: &ViewState,
        viewport: Viewport,
        bounds: PlaneBounds,
        debug_axes: bool,
    ) -> Self {
        Self {
            viewport,
            bounds,
            zoom: view_state.zoom(),
            pan_offset: view_state.pan_offset(),
            max_iterations: view_state.max_iterations(),
            debug_axes,
        }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Sample = EscapeSample;

    fn compute(&self, pixel: Point) -> Self::Sample {
        let relative = view_relative_coords(pixel, self.viewport, self.bounds, self.zoom);

        // Axes are tested before the pan offset so they track the view, not the plane.
        if self.debug_axes && (relative.real == 0.0 || relative.imag == 0.0) {
            return EscapeSample::AxisMarker;
        }

        EscapeSample::Iterations(escape_iterations(
            relative + self.pan_offset,
            self.max_iterations,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        for max in [1, 2, 17, 256, 1000] {
            assert_eq!(escape_iterations(Complex::ZERO, max), max);
        }
        assert_eq!(escape_iterations(Complex::new(0.0, 0.0), 1000), 1000);
    }

    #[test]
    fn test_far_points_escape_quickly() {
        assert!(escape_iterations(Complex::new(5.0, 5.0), 1000) <= 3);
        assert!(escape_iterations(Complex::new(1.0001, 0.0), 1000) <= 3);
        assert!(escape_iterations(Complex::new(1.5, 0.0), 1000) <= 3);
        assert!(escape_iterations(Complex::new(3.0, -0.5), 1000) <= 3);
    }

    #[test]
    fn test_first_iteration_never_escapes() {
        assert_eq!(escape_iterations(Complex::new(5.0, 5.0), 1000), 1);
        assert_eq!(escape_iterations(Complex::new(-2.0, -1.0), 1000), 1);
    }

    #[test]
    fn test_boundary_point_minus_two_stays_bounded() {
        // -2 maps to 2 then stays there; the radius test is strict.
        assert_eq!(escape_iterations(Complex::new(-2.0, 0.0), 500), 500);
    }

    #[test]
    fn test_result_is_capped_by_max_iterations() {
        assert_eq!(escape_iterations(Complex::new(5.0, 5.0), 1), 1);
        assert_eq!(escape_iterations(Complex::new(-0.5, 0.25), 10), 10);
    }

    #[test]
    fn test_non_finite_input_does_not_fault() {
        assert_eq!(escape_iterations(Complex::new(f64::NAN, 0.0), 50), 50);
        assert_eq!(escape_iterations(Complex::new(f64::INFINITY, 0.0), 50), 1);
        assert_eq!(escape_iterations(Complex::new(0.0, f64::NEG_INFINITY), 50), 1);
    }

    fn create_algorithm(debug_axes: bool) -> MandelbrotAlgorithm {
        MandelbrotAlgorithm::new(
            &ViewState::default(),
            Viewport::new(800, 600).unwrap(),
            PlaneBounds::DEFAULT,
            debug_axes,
        )
    }

    #[test]
    fn test_compute_maps_pixel_before_iterating() {
        let algorithm = create_algorithm(false);

        assert_eq!(
            algorithm.compute(Point { x: 0, y: 0 }),
            EscapeSample::Iterations(1)
        );
        assert_eq!(
            algorithm.compute(Point { x: 400, y: 300 }),
            EscapeSample::Iterations(1000)
        );
    }

    #[test]
    fn test_axis_marker_only_when_enabled() {
        let on_axis = Point { x: 10, y: 300 };

        assert_eq!(create_algorithm(true).compute(on_axis), EscapeSample::AxisMarker);
        assert!(matches!(
            create_algorithm(false).compute(on_axis),
            EscapeSample::Iterations(_)
        ));
        assert!(matches!(
            create_algorithm(true).compute(Point { x: 10, y: 301 }),
            EscapeSample::Iterations(_)
        ));
    }

    #[test]
    fn test_axis_marker_ignores_pan_offset() {
        let viewport = Viewport::new(800, 600).unwrap();
        let mut state = ViewState::default();
        state.pan(Point { x: 0, y: 0 }, viewport, PlaneBounds::DEFAULT);
        let algorithm = MandelbrotAlgorithm::new(&state, viewport, PlaneBounds::DEFAULT, true);

        assert_eq!(
            algorithm.compute(Point { x: 10, y: 300 }),
            EscapeSample::AxisMarker
        );
    }

    #[test]
    fn test_snapshot_uses_view_state_iterations() {
        let state = ViewState::new(42, Default::default()).unwrap();
        let algorithm = MandelbrotAlgorithm::new(
            &state,
            Viewport::new(800, 600).unwrap(),
            PlaneBounds::DEFAULT,
            false,
        );

        assert_eq!(
            algorithm.compute(Point { x: 400, y: 300 }),
            EscapeSample::Iterations(42)
        );
    }
}
