//! Windowed preview: winit for the window, pixels for the gradient strip and
//! egui for the slider and swatch panel.

mod app;

pub use app::run_gui;
