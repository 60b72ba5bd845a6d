//! GUI input adapter for interactive exploration.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for framebuffer rendering, and egui for the overlay and colour dialog.

mod app;
pub mod colour_dialog;
pub mod key_bindings;
pub mod ports;
pub mod run_gui;
