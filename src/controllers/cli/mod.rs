//! Headless rendering: replay scripted input, write the frame to disk.

pub mod event_script;
pub mod render_ppm;

pub use event_script::EventScriptError;
pub use render_ppm::CliRenderController;
