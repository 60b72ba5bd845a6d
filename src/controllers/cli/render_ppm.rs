use std::path::Path;

use log::warn;

use crate::controllers::interactive::ExplorerController;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::submit::SubmitError;
use crate::controllers::interactive::events::input_event::InputEvent;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

/// Drives an [`ExplorerController`] from a fixed list of events and writes
/// the resulting frame through a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    controller: ExplorerController,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(
        presenter: P,
        config: MandelbrotConfig,
        viewport: Viewport,
    ) -> Result<Self, MandelbrotError> {
        Ok(Self {
            presenter,
            controller: ExplorerController::new(config, viewport)?,
        })
    }

    /// Applies `events` in order, stopping at the first rejected submission.
    pub fn replay(
        &mut self,
        events: impl IntoIterator<Item = InputEvent>,
    ) -> Result<(), SubmitError> {
        for event in events {
            self.controller.handle_event(event)?;
        }

        Ok(())
    }

    /// The frame for the current view, rendering it first if it is stale.
    pub fn frame(&mut self) -> Option<&FrameData> {
        self.controller.render_if_dirty();
        self.controller.frame()
    }

    pub fn write(&mut self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        self.controller.render_if_dirty();

        match self.controller.frame() {
            Some(frame) => self.presenter.present(&frame.frame_buffer, filepath),
            None => {
                warn!("nothing written: the viewport is empty");
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn controller(&self) -> &ExplorerController {
        &self.controller
    }
}
