//! Port definitions for the interactive controller.
//!
//! Traits the controller drives to hand finished frames to the
//! presentation layer.

pub mod presenter;
