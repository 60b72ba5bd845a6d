mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use controllers::cli::{CliRenderController, EventScriptError};
pub use controllers::interactive::submission::{parse_hex_colour, parse_max_iterations};
pub use controllers::interactive::{
    ExplorerController, FrameData, FramePresenterPort, InputEvent, RenderState, SubmitError,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use presenters::file::ppm::PpmFilePresenter;

pub use crate::core::actions::render_frame::render_frame::{
    RenderMode, RenderOptions, render_frame,
};
pub use crate::core::data::colour::Rgba;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
pub use crate::core::data::plane_bounds::{PlaneBounds, PlaneBoundsError};
pub use crate::core::data::point::Point;
pub use crate::core::data::view_state::{ViewState, ZoomStepDirection};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::escape_iterations;
pub use crate::core::fractals::mandelbrot::colour_map::color_for;
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

#[cfg(feature = "gui")]
pub use input::gui::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
