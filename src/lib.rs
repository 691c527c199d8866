mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use controllers::cli::args::{GradientArgs, OutputFormat};
pub use controllers::cli::gradient::GradientCliController;
pub use controllers::ports::file_presenter::{FilePresenterPort, WriteImageError};
pub use crate::core::actions::generate_gradient::generate_gradient::{
    generate_gradient, gradient_sample_positions, GRADIENT_AXIS_LABELS,
};
pub use crate::core::actions::generate_gradient::generate_gradient_rayon::generate_gradient_rayon;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    generate_pixel_buffer, GeneratePixelBufferError,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapFailure};
pub use crate::core::colour_mapping::calculate_colour::{calculate_channels, calculate_colour, HALF_POINT};
pub use crate::core::colour_mapping::errors::TransitionColourMapError;
pub use crate::core::colour_mapping::transition_colour_map::TransitionColourMap;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::swatch::swatch::{Swatch, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP};
#[cfg(feature = "gui")]
pub use input::gui::run_gui;
pub use presenters::file::png::PngFilePresenter;
pub use presenters::file::ppm::PpmFilePresenter;
