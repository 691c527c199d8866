//! Input adapters for the colour transition preview.

#[cfg(feature = "gui")]
pub mod gui;
