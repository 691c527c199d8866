use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapFailure};
use crate::core::colour_mapping::calculate_colour::calculate_colour;
use crate::core::colour_mapping::errors::TransitionColourMapError;
use crate::core::data::colour::Colour;

/// Checked front for [`calculate_colour`] that refuses positions the ramp
/// was not designed for.
#[derive(Debug, Default, Clone, Copy)]
pub struct TransitionColourMap;

impl TransitionColourMap {
    pub const DISPLAY_NAME: &'static str = "Yellow-teal-blue transition";

    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ColourMap<f64> for TransitionColourMap {
    fn map(&self, t: f64) -> Result<Colour, ColourMapFailure> {
        if !t.is_finite() {
            return Err(Box::new(TransitionColourMapError::NonFinite { t }));
        }

        if !(0.0..=1.0).contains(&t) {
            return Err(Box::new(TransitionColourMapError::OutOfRange { t }));
        }

        Ok(calculate_colour(t))
    }

    fn display_name(&self) -> &str {
        Self::DISPLAY_NAME
    }
}
