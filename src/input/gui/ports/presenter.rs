use std::time::Duration;

use egui::Context as EguiContext;
use egui::TexturesDelta;
use egui::epaint::ClippedShape;

use crate::controllers::interactive::ports::presenter::FramePresenterPort;

/// A frame presenter that also owns the window surface and draws the egui
/// overlay on top of the fractal.
pub trait GuiPresenterPort: FramePresenterPort {
    fn render(
        &mut self,
        shapes: Vec<ClippedShape>,
        textures_delta: TexturesDelta,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;

    fn last_render_duration(&self) -> Option<Duration>;
}
