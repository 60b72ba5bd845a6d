use std::time::Instant;

use log::{debug, info, warn};

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::submit::SubmitError;
use crate::controllers::interactive::events::input_event::InputEvent;
use crate::controllers::interactive::ports::presenter::FramePresenterPort;
use crate::controllers::interactive::render_state::RenderState;
use crate::controllers::interactive::submission::parse_submission;
use crate::core::actions::render_frame::render_frame::{RenderOptions, render_frame};
use crate::core::data::colour::Rgba;
use crate::core::data::complex::Complex;
use crate::core::data::plane_bounds::PlaneBounds;
use crate::core::data::point::Point;
use crate::core::data::view_state::{ViewState, ZoomStepDirection};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::util::pixel_to_complex_coords::screen_to_complex_coords;

/// Single owner of the view state. Consumes input events, tracks whether the
/// frame is stale and re-renders on demand.
///
/// Rendering is synchronous: [`render_if_dirty`](Self::render_if_dirty)
/// returns only once the whole frame is written.
#[derive(Debug)]
pub struct ExplorerController {
    view_state: ViewState,
    bounds: PlaneBounds,
    viewport: Option<Viewport>,
    options: RenderOptions,
    render_state: RenderState,
    dialog_open: bool,
    pointer_coords: Complex,
    generation: u64,
    frame: Option<FrameData>,
}

impl ExplorerController {
    /// A controller over the default plane bounds. The first frame is owed
    /// immediately.
    pub fn new(config: MandelbrotConfig, viewport: Viewport) -> Result<Self, MandelbrotError> {
        Ok(Self {
            view_state: config.initial_view_state()?,
            bounds: PlaneBounds::DEFAULT,
            viewport: Some(viewport),
            options: config.render_options(),
            render_state: RenderState::Dirty,
            dialog_open: false,
            pointer_coords: Complex::ZERO,
            generation: 0,
            frame: None,
        })
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Result<(), SubmitError> {
        match event {
            InputEvent::PointerRelease { x, y } => self.pan(Point { x, y }),
            InputEvent::PointerMoved { x, y } => self.track_pointer(Point { x, y }),
            InputEvent::Scroll { delta } => self.zoom_in_out(delta),
            InputEvent::KeyReset => {
                self.view_state.reset();
                debug!("view reset");
                self.mark_dirty();
            }
            InputEvent::KeyZoomStepUp => self.adjust_zoom_step(ZoomStepDirection::Up),
            InputEvent::KeyZoomStepDown => self.adjust_zoom_step(ZoomStepDirection::Down),
            InputEvent::KeyOpenColorDialog if self.dialog_open => {
                debug!("colour dialog already open");
            }
            InputEvent::KeyOpenColorDialog => {
                self.dialog_open = true;
                debug!("colour dialog opened");
            }
            InputEvent::CloseColorDialog => {
                self.dialog_open = false;
                debug!("colour dialog closed");
            }
            InputEvent::ToggleDebugAxes => {
                self.options.debug_axes = !self.options.debug_axes;
                debug!("debug axes {}", if self.options.debug_axes { "on" } else { "off" });
                self.mark_dirty();
            }
            InputEvent::SubmitColorAndIterations {
                hex_rgba,
                max_iterations,
            } => return self.submit_color_and_iterations(&hex_rgba, &max_iterations),
            InputEvent::Resize { width, height } => self.resize(width, height),
        }

        Ok(())
    }

    /// Applies a colour dialog submission. Both values are validated before
    /// either is applied; on error nothing changes and the dialog stays open.
    pub fn submit_color_and_iterations(
        &mut self,
        hex_rgba: &str,
        max_iterations: &str,
    ) -> Result<(), SubmitError> {
        let submission = parse_submission(hex_rgba, max_iterations).inspect_err(|err| {
            warn!("rejected colour submission: {}", err);
        })?;

        self.view_state
            .set_colour_and_iterations(submission.base_colour, submission.max_iterations);
        self.dialog_open = false;
        debug!(
            "base colour {} with {} max iterations",
            submission.base_colour, submission.max_iterations
        );
        self.mark_dirty();

        Ok(())
    }

    /// Renders a new frame if the view changed since the last one.
    ///
    /// Returns the new frame, or `None` when nothing was owed or the
    /// viewport is empty.
    pub fn render_if_dirty(&mut self) -> Option<&FrameData> {
        if self.render_state == RenderState::Idle {
            return None;
        }
        self.render_state = RenderState::Idle;

        // Drop the old buffer before building its replacement.
        self.frame = None;

        let viewport = self.viewport?;
        let start = Instant::now();
        let frame_buffer = render_frame(&self.view_state, viewport, self.bounds, self.options);
        let render_duration = start.elapsed();
        self.generation += 1;

        info!(
            "frame {} rendered at {}x{} in {:?}",
            self.generation,
            viewport.width(),
            viewport.height(),
            render_duration
        );

        self.frame = Some(FrameData {
            generation: self.generation,
            frame_buffer,
            render_duration,
        });

        self.frame.as_ref()
    }

    /// Renders if needed and hands the new frame to `presenter`. Returns
    /// whether anything was presented.
    pub fn present_if_dirty<P: FramePresenterPort + ?Sized>(&mut self, presenter: &mut P) -> bool {
        match self.render_if_dirty() {
            Some(frame) => {
                presenter.present(frame);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn frame(&self) -> Option<&FrameData> {
        self.frame.as_ref()
    }

    #[must_use]
    pub fn render_state(&self) -> RenderState {
        self.render_state
    }

    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    #[must_use]
    pub fn zoom(&self) -> u64 {
        self.view_state.zoom()
    }

    #[must_use]
    pub fn zoom_step(&self) -> u64 {
        self.view_state.zoom_step()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.view_state.max_iterations()
    }

    #[must_use]
    pub fn base_colour(&self) -> Rgba {
        self.view_state.base_colour()
    }

    /// Plane position under the pointer as of the last `PointerMoved`.
    #[must_use]
    pub fn pointer_coords(&self) -> Complex {
        self.pointer_coords
    }

    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    #[must_use]
    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    #[must_use]
    pub fn debug_axes(&self) -> bool {
        self.options.debug_axes
    }

    fn pan(&mut self, screen: Point) {
        if self.dialog_open {
            debug!("pan ignored while colour dialog is open");
            return;
        }
        let Some(viewport) = self.viewport else {
            return;
        };

        self.view_state.pan(screen, viewport, self.bounds);
        let offset = self.view_state.pan_offset();
        debug!("pan offset x:{} y:{}", offset.real, offset.imag);
        self.mark_dirty();
    }

    fn track_pointer(&mut self, screen: Point) {
        let Some(viewport) = self.viewport else {
            return;
        };

        self.pointer_coords =
            screen_to_complex_coords(screen, viewport, self.bounds, &self.view_state);
        debug!(
            "pointer at x:{} y:{}",
            self.pointer_coords.real, self.pointer_coords.imag
        );
    }

    fn zoom_in_out(&mut self, delta: f32) {
        if self.dialog_open {
            debug!("zoom ignored while colour dialog is open");
            return;
        }

        self.view_state.zoom_in_out(delta);
        debug!("zoom {}", self.view_state.zoom());
        self.mark_dirty();
    }

    fn adjust_zoom_step(&mut self, direction: ZoomStepDirection) {
        self.view_state.adjust_zoom_step(direction);
        debug!("zoom step {}", self.view_state.zoom_step());
    }

    fn resize(&mut self, width: u32, height: u32) {
        let origin = self.viewport.map_or(Point::ORIGIN, |viewport| viewport.origin());

        self.viewport = match Viewport::new(width, height) {
            Ok(viewport) => Some(viewport.with_origin(origin)),
            Err(err) => {
                debug!("rendering paused: {}", err);
                None
            }
        };
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        self.render_state = RenderState::Dirty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_frame::render_frame::RenderMode;
    use crate::core::data::view_state::{DEFAULT_BASE_COLOUR, DEFAULT_MAX_ITERATIONS};

    #[derive(Default)]
    struct MockPresenterPort {
        generations: Vec<u64>,
        sizes: Vec<(u32, u32)>,
    }

    impl FramePresenterPort for MockPresenterPort {
        fn present(&mut self, frame: &FrameData) {
            self.generations.push(frame.generation);
            self.sizes
                .push((frame.frame_buffer.width(), frame.frame_buffer.height()));
        }
    }

    fn create_controller() -> ExplorerController {
        let config = MandelbrotConfig {
            render_mode: RenderMode::Serial,
            ..MandelbrotConfig::default()
        };
        ExplorerController::new(config, Viewport::new(80, 60).unwrap()).unwrap()
    }

    fn idle_controller() -> ExplorerController {
        let mut controller = create_controller();
        controller.render_if_dirty();
        controller
    }

    #[test]
    fn test_new_controller_owes_first_frame() {
        let mut controller = create_controller();

        assert_eq!(controller.render_state(), RenderState::Dirty);
        let frame = controller.render_if_dirty().unwrap();
        assert_eq!(frame.generation, 1);
        assert_eq!(frame.frame_buffer.viewport(), Viewport::new(80, 60).unwrap());
        assert_eq!(controller.render_state(), RenderState::Idle);
    }

    #[test]
    fn test_new_rejects_zero_iterations() {
        let config = MandelbrotConfig {
            max_iterations: 0,
            ..MandelbrotConfig::default()
        };

        let result = ExplorerController::new(config, Viewport::new(10, 10).unwrap());

        assert_eq!(result.unwrap_err(), MandelbrotError::ZeroMaxIterations);
    }

    #[test]
    fn test_dirty_triggers_exactly_one_render() {
        let mut controller = idle_controller();

        assert!(controller.render_if_dirty().is_none());
        assert_eq!(controller.frame().unwrap().generation, 1);

        controller.handle_event(InputEvent::Scroll { delta: -1.0 }).unwrap();
        controller.handle_event(InputEvent::Scroll { delta: -1.0 }).unwrap();

        assert_eq!(controller.render_if_dirty().unwrap().generation, 2);
        assert!(controller.render_if_dirty().is_none());
    }

    #[test]
    fn test_pointer_release_pans_and_marks_dirty() {
        let mut controller = idle_controller();

        controller
            .handle_event(InputEvent::PointerRelease { x: 40, y: 30 })
            .unwrap();

        assert_eq!(controller.view_state().pan_offset(), Complex::new(-0.5, 0.0));
        assert_eq!(controller.render_state(), RenderState::Dirty);
    }

    #[test]
    fn test_scroll_zooms() {
        let mut controller = idle_controller();

        controller.handle_event(InputEvent::Scroll { delta: -3.0 }).unwrap();
        assert_eq!(controller.zoom(), 4);

        controller.handle_event(InputEvent::Scroll { delta: 10.0 }).unwrap();
        assert_eq!(controller.zoom(), 1);
    }

    #[test]
    fn test_zoom_step_keys_do_not_mark_dirty() {
        let mut controller = idle_controller();

        controller.handle_event(InputEvent::KeyZoomStepUp).unwrap();
        controller.handle_event(InputEvent::KeyZoomStepUp).unwrap();
        assert_eq!(controller.zoom_step(), 4);
        controller.handle_event(InputEvent::KeyZoomStepDown).unwrap();
        assert_eq!(controller.zoom_step(), 2);

        assert_eq!(controller.render_state(), RenderState::Idle);
    }

    #[test]
    fn test_reset_restores_defaults_and_keeps_colour() {
        let mut controller = idle_controller();
        controller
            .submit_color_and_iterations("FF0000FF", "50")
            .unwrap();
        controller.handle_event(InputEvent::KeyZoomStepUp).unwrap();
        controller.handle_event(InputEvent::Scroll { delta: -2.0 }).unwrap();
        controller
            .handle_event(InputEvent::PointerRelease { x: 1, y: 2 })
            .unwrap();
        controller.render_if_dirty();

        controller.handle_event(InputEvent::KeyReset).unwrap();

        assert_eq!(controller.zoom(), 1);
        assert_eq!(controller.zoom_step(), 1);
        assert_eq!(controller.view_state().pan_offset(), Complex::ZERO);
        assert_eq!(controller.max_iterations(), DEFAULT_MAX_ITERATIONS);
        assert_eq!(controller.base_colour(), Rgba(0xFF00_00FF));
        assert_eq!(controller.render_state(), RenderState::Dirty);
    }

    #[test]
    fn test_invalid_colour_submission_changes_nothing() {
        let mut controller = idle_controller();
        controller.handle_event(InputEvent::KeyOpenColorDialog).unwrap();

        let result = controller.handle_event(InputEvent::SubmitColorAndIterations {
            hex_rgba: "ZZZZZZZZ".to_string(),
            max_iterations: "64".to_string(),
        });

        assert!(matches!(result, Err(SubmitError::InvalidColorInput { .. })));
        assert_eq!(controller.max_iterations(), DEFAULT_MAX_ITERATIONS);
        assert_eq!(controller.base_colour(), DEFAULT_BASE_COLOUR);
        assert!(controller.is_dialog_open());
        assert_eq!(controller.render_state(), RenderState::Idle);
    }

    #[test]
    fn test_invalid_iterations_keep_valid_colour_unapplied() {
        let mut controller = idle_controller();

        let result = controller.submit_color_and_iterations("FF0000FF", "0");

        assert!(matches!(
            result,
            Err(SubmitError::InvalidIterationInput { .. })
        ));
        assert_eq!(controller.base_colour(), DEFAULT_BASE_COLOUR);
        assert_eq!(controller.max_iterations(), DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn test_valid_submission_applies_and_closes_dialog() {
        let mut controller = idle_controller();
        controller.handle_event(InputEvent::KeyOpenColorDialog).unwrap();

        controller
            .handle_event(InputEvent::SubmitColorAndIterations {
                hex_rgba: "12345678".to_string(),
                max_iterations: "64".to_string(),
            })
            .unwrap();

        assert_eq!(controller.base_colour(), Rgba(0x1234_5678));
        assert_eq!(controller.max_iterations(), 64);
        assert!(!controller.is_dialog_open());
        assert_eq!(controller.render_state(), RenderState::Dirty);
    }

    #[test]
    fn test_open_dialog_blocks_pan_and_zoom() {
        let mut controller = idle_controller();
        controller.handle_event(InputEvent::Scroll { delta: -3.0 }).unwrap();
        controller.render_if_dirty();
        controller.handle_event(InputEvent::KeyOpenColorDialog).unwrap();

        controller
            .handle_event(InputEvent::PointerRelease { x: 0, y: 0 })
            .unwrap();
        controller.handle_event(InputEvent::Scroll { delta: -5.0 }).unwrap();

        assert_eq!(controller.view_state().pan_offset(), Complex::ZERO);
        assert_eq!(controller.zoom(), 4);
        assert_eq!(controller.render_state(), RenderState::Idle);

        controller.handle_event(InputEvent::KeyReset).unwrap();

        assert_eq!(controller.zoom(), 1);
        assert_eq!(controller.zoom_step(), 1);
        assert_eq!(controller.max_iterations(), DEFAULT_MAX_ITERATIONS);
        assert_eq!(controller.render_state(), RenderState::Dirty);
        assert!(controller.is_dialog_open());

        controller.handle_event(InputEvent::CloseColorDialog).unwrap();
        controller.handle_event(InputEvent::Scroll { delta: -5.0 }).unwrap();
        assert_eq!(controller.zoom(), 6);
    }

    #[test]
    fn test_reopening_open_dialog_is_ignored() {
        let mut controller = idle_controller();
        controller.handle_event(InputEvent::KeyOpenColorDialog).unwrap();
        let rejected = controller.handle_event(InputEvent::SubmitColorAndIterations {
            hex_rgba: "ZZZZZZZZ".to_string(),
            max_iterations: "64".to_string(),
        });
        assert!(rejected.is_err());

        controller.handle_event(InputEvent::KeyOpenColorDialog).unwrap();

        assert!(controller.is_dialog_open());
        assert_eq!(controller.base_colour(), DEFAULT_BASE_COLOUR);
        assert_eq!(controller.render_state(), RenderState::Idle);

        controller.handle_event(InputEvent::CloseColorDialog).unwrap();
        assert!(!controller.is_dialog_open());
        controller.handle_event(InputEvent::KeyOpenColorDialog).unwrap();
        assert!(controller.is_dialog_open());
    }

    #[test]
    fn test_pointer_moved_tracks_plane_coords_without_rendering() {
        let mut controller = idle_controller();

        controller
            .handle_event(InputEvent::PointerMoved { x: 0, y: 0 })
            .unwrap();

        assert_eq!(controller.pointer_coords(), Complex::new(-2.0, -1.0));
        assert_eq!(controller.render_state(), RenderState::Idle);

        controller
            .handle_event(InputEvent::PointerRelease { x: 40, y: 30 })
            .unwrap();
        controller
            .handle_event(InputEvent::PointerMoved { x: 40, y: 30 })
            .unwrap();

        assert_eq!(controller.pointer_coords(), Complex::new(-1.0, 0.0));
    }

    #[test]
    fn test_letterboxed_viewport_offsets_pointer() {
        let viewport = Viewport::new(80, 60)
            .unwrap()
            .with_origin(Point { x: 10, y: 5 });
        let mut controller =
            ExplorerController::new(MandelbrotConfig::default(), viewport).unwrap();

        controller
            .handle_event(InputEvent::PointerMoved { x: 10, y: 5 })
            .unwrap();

        assert_eq!(controller.pointer_coords(), Complex::new(-2.0, -1.0));
    }

    #[test]
    fn test_toggle_debug_axes_marks_dirty() {
        let mut controller = idle_controller();
        assert!(!controller.debug_axes());

        controller.handle_event(InputEvent::ToggleDebugAxes).unwrap();

        assert!(controller.debug_axes());
        assert_eq!(controller.render_state(), RenderState::Dirty);
        let frame = controller.render_if_dirty().unwrap();
        assert_eq!(
            frame.frame_buffer.pixel(Point { x: 5, y: 30 }),
            Some(Rgba::AXIS_MARKER)
        );
    }

    #[test]
    fn test_resize_to_zero_pauses_rendering() {
        let mut controller = idle_controller();

        controller
            .handle_event(InputEvent::Resize {
                width: 0,
                height: 60,
            })
            .unwrap();

        assert_eq!(controller.viewport(), None);
        assert!(controller.render_if_dirty().is_none());
        assert!(controller.frame().is_none());

        controller
            .handle_event(InputEvent::PointerRelease { x: 1, y: 1 })
            .unwrap();
        assert_eq!(controller.view_state().pan_offset(), Complex::ZERO);

        controller
            .handle_event(InputEvent::Resize {
                width: 20,
                height: 10,
            })
            .unwrap();
        let frame = controller.render_if_dirty().unwrap();
        assert_eq!(frame.frame_buffer.width(), 20);
        assert_eq!(frame.frame_buffer.height(), 10);
    }

    #[test]
    fn test_present_if_dirty_presents_each_frame_once() {
        let mut controller = create_controller();
        let mut presenter = MockPresenterPort::default();

        assert!(controller.present_if_dirty(&mut presenter));
        assert!(!controller.present_if_dirty(&mut presenter));
        controller
            .handle_event(InputEvent::Resize {
                width: 30,
                height: 20,
            })
            .unwrap();
        assert!(controller.present_if_dirty(&mut presenter));

        assert_eq!(presenter.generations, vec![1, 2]);
        assert_eq!(presenter.sizes, vec![(80, 60), (30, 20)]);
    }
}
