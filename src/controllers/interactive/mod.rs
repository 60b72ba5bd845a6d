//! Interactive controller for exploring the Mandelbrot set.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: [`InputEvent`] values translated from the windowing layer
//! - **Output**: [`FramePresenterPort`] receives each finished frame
//! - **Core**: Uses domain actions from `core/` for the actual computation

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;
pub mod render_state;
pub mod submission;

pub use controller::ExplorerController;
pub use data::frame_data::FrameData;
pub use errors::submit::SubmitError;
pub use events::input_event::InputEvent;
pub use ports::presenter::FramePresenterPort;
pub use render_state::RenderState;
