use crate::core::data::colour::Rgba;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Submit {
        hex_rgba: String,
        max_iterations: String,
    },
    Cancel,
}

/// Text fields of the colour and iteration dialog.
#[derive(Debug, Default)]
pub struct ColourDialog {
    visible: bool,
    hex_rgba: String,
    max_iterations: String,
    error: Option<String>,
}

impl ColourDialog {
    /// Shows the dialog pre-filled with the current values.
    pub fn open(&mut self, base_colour: Rgba, max_iterations: u32) {
        self.visible = true;
        self.hex_rgba = format!("{:x}", base_colour);
        self.max_iterations = max_iterations.to_string();
        self.error = None;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.error = None;
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<DialogOutcome> {
        if !self.visible {
            return None;
        }

        let mut outcome = None;

        egui::Window::new("Colour")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::Grid::new("colour_dialog_fields").show(ui, |ui| {
                    ui.label("RGBA (hex):");
                    ui.text_edit_singleline(&mut self.hex_rgba);
                    ui.end_row();

                    ui.label("Max iterations:");
                    ui.text_edit_singleline(&mut self.max_iterations);
                    ui.end_row();
                });

                if let Some(message) = &self.error {
                    ui.colored_label(egui::Color32::LIGHT_RED, message);
                }

                ui.horizontal(|ui| {
                    if ui.button("Apply").clicked() {
                        outcome = Some(DialogOutcome::Submit {
                            hex_rgba: self.hex_rgba.clone(),
                            max_iterations: self.max_iterations.clone(),
                        });
                    }
                    if ui.button("Cancel").clicked() {
                        outcome = Some(DialogOutcome::Cancel);
                    }
                });
            });

        outcome
    }
}
