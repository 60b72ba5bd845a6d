//! Pixel to complex-plane mapping.
//!
//! A pixel `(px, py)` in a `width x height` viewport maps to
//!
//! ```text
//! real = ((px / width)  * x_span + x_start) / zoom + x_offset
//! imag = ((py / height) * y_span + y_start) / zoom + y_offset
//! ```
//!
//! The mapping is total: pixels outside the viewport land outside the nominal
//! plane window rather than being rejected.
//!
//! Everything is `f64`. Once `zoom` approaches 2^52 the distance between
//! neighbouring pixels falls below the spacing of representable values near
//! the pan offset and the image turns blocky. That is the expected limit of
//! fixed-width floats, not an error.

use crate::core::data::complex::Complex;
use crate::core::data::plane_bounds::PlaneBounds;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;

/// Plane position of a viewport pixel at the given zoom, before the pan
/// offset is applied.
#[must_use]
pub fn view_relative_coords(
    pixel: Point,
    viewport: Viewport,
    bounds: PlaneBounds,
    zoom: u64,
) -> Complex {
    let zoom = zoom as f64;
    let real = ((f64::from(pixel.x) / f64::from(viewport.width())) * bounds.x_span()
        + bounds.x_start())
        / zoom;
    let imag = ((f64::from(pixel.y) / f64::from(viewport.height())) * bounds.y_span()
        + bounds.y_start())
        / zoom;

    Complex { real, imag }
}

#[must_use]
pub fn pixel_to_complex_coords(
    pixel: Point,
    viewport: Viewport,
    bounds: PlaneBounds,
    view_state: &ViewState,
) -> Complex {
    view_relative_coords(pixel, viewport, bounds, view_state.zoom()) + view_state.pan_offset()
}

/// Like [`pixel_to_complex_coords`] for a position in screen space, i.e.
/// before the viewport origin is subtracted.
#[must_use]
pub fn screen_to_complex_coords(
    screen: Point,
    viewport: Viewport,
    bounds: PlaneBounds,
    view_state: &ViewState,
) -> Complex {
    pixel_to_complex_coords(
        viewport.screen_to_viewport(screen),
        viewport,
        bounds,
        view_state,
    )
}
