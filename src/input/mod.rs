//! Input adapters for the explorer.
//!
//! Adapters receive input from a source and translate it into
//! controller events.

#[cfg(feature = "gui")]
pub mod gui;
