//! Main GUI application loop.

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::error;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::Window,
};

use crate::controllers::interactive::ExplorerController;
use crate::controllers::interactive::events::input_event::InputEvent;
use crate::input::gui::colour_dialog::{ColourDialog, DialogOutcome};
use crate::input::gui::key_bindings::{GuiAction, InputTranslator};
use crate::input::gui::ports::presenter::GuiPresenterPort;

pub struct GuiApp<P: GuiPresenterPort> {
    presenter: P,
    controller: ExplorerController,
    input: InputTranslator,
    dialog: ColourDialog,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<P: GuiPresenterPort> GuiApp<P> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: P,
        controller: ExplorerController,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            presenter,
            controller,
            input: InputTranslator::default(),
            dialog: ColourDialog::default(),
            egui_ctx,
            egui_state,
        }
    }

    /// Runs the event loop until the window closes or Escape is pressed.
    pub fn run(
        mut self,
        window: &'static Window,
        event_loop: EventLoop<()>,
    ) -> Result<(), winit::error::EventLoopError> {
        let mut redraw_pending = true;

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let egui_response = self.egui_state.on_window_event(window, event);
                if egui_response.repaint {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        match self.redraw(window) {
                            Ok(repaint) => redraw_pending |= repaint,
                            Err(err) => {
                                error!("render error: {}", err);
                                elwt.exit();
                            }
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(err) = self.resize(size.width, size.height) {
                            error!("resize error: {}", err);
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        if let Err(err) = self.resize(size.width, size.height) {
                            error!("resize error: {}", err);
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    _ if egui_response.consumed => {}
                    _ => match self.input.translate(event) {
                        Some(GuiAction::Exit) => elwt.exit(),
                        Some(GuiAction::Explorer(input)) => {
                            self.dispatch(input);
                            redraw_pending = true;
                        }
                        None => {}
                    },
                }
            }
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })
    }

    fn dispatch(&mut self, event: InputEvent) {
        let was_open = self.controller.is_dialog_open();

        match self.controller.handle_event(event) {
            Ok(()) => {
                if !was_open && self.controller.is_dialog_open() {
                    self.dialog.open(
                        self.controller.base_colour(),
                        self.controller.max_iterations(),
                    );
                } else if self.dialog.is_visible() && !self.controller.is_dialog_open() {
                    self.dialog.close();
                }
            }
            Err(err) => self.dialog.set_error(err.to_string()),
        }
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.presenter.resize(width, height)?;
        self.dispatch(InputEvent::Resize { width, height });

        Ok(())
    }

    /// Presents a new frame if one is owed and draws the overlay. Returns
    /// whether egui asked for another repaint straight away.
    fn redraw(&mut self, window: &Window) -> Result<bool, pixels::Error> {
        self.controller.present_if_dirty(&mut self.presenter);

        let egui_output = self.update_ui(window);
        self.egui_state
            .handle_platform_output(window, egui_output.platform_output);

        let repaint = egui_output
            .viewport_output
            .values()
            .any(|viewport| viewport.repaint_delay.is_zero());

        self.presenter
            .render(egui_output.shapes, egui_output.textures_delta, &self.egui_ctx)?;

        Ok(repaint)
    }

    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let mut dialog_outcome = None;

        let egui_output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Mandelbrot")
                .default_pos([10.0, 10.0])
                .resizable(false)
                .show(ctx, |ui| {
                    let pointer = self.controller.pointer_coords();
                    ui.label(format!("Zoom: {}", self.controller.zoom()));
                    ui.label(format!("Zoom factor: {}", self.controller.zoom_step()));
                    ui.label(format!("x: {:.6}  y: {:.6}", pointer.real, pointer.imag));
                    ui.label(format!(
                        "Max iterations: {}",
                        self.controller.max_iterations()
                    ));
                    if let Some(render_duration) = self.presenter.last_render_duration() {
                        ui.label(format!("Last render: {} ms", render_duration.as_millis()));
                    }
                    ui.separator();
                    ui.small("Space reset · PgUp/PgDn zoom factor · Enter colour · D axes");
                });

            dialog_outcome = self.dialog.show(ctx);
        });

        match dialog_outcome {
            Some(DialogOutcome::Submit {
                hex_rgba,
                max_iterations,
            }) => self.dispatch(InputEvent::SubmitColorAndIterations {
                hex_rgba,
                max_iterations,
            }),
            Some(DialogOutcome::Cancel) => self.dispatch(InputEvent::CloseColorDialog),
            None => {}
        }

        egui_output
    }
}
