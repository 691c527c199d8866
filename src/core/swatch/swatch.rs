use crate::core::colour_mapping::calculate_colour::calculate_colour;
use crate::core::data::colour::Colour;

pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 1.0;
pub const SLIDER_STEP: f64 = 0.01;

/// Slider state for the colour preview.
///
/// Holds the current transition position and derives everything the swatch
/// panel shows from it. Values arrive as-is from the slider; out-of-range
/// positions render with the saturating behaviour of [`calculate_colour`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Swatch {
    time: f64,
}

impl Swatch {
    #[must_use]
    pub fn new(time: f64) -> Self {
        Self { time }
    }

    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn set_time(&mut self, time: f64) {
        self.time = time;
    }

    /// Mutable handle for slider widgets that edit the value in place.
    pub fn time_mut(&mut self) -> &mut f64 {
        &mut self.time
    }

    #[must_use]
    pub fn colour(&self) -> Colour {
        calculate_colour(self.time)
    }

    /// `t = 0.25`
    #[must_use]
    pub fn time_label(&self) -> String {
        format!("t = {:.2}", self.time)
    }

    /// `r: 128  g: 191  b: 64`
    #[must_use]
    pub fn readout(&self) -> String {
        let Colour { r, g, b } = self.colour();
        format!("r: {}  g: {}  b: {}", r, g, b)
    }

    /// Fill colour in CSS notation, `rgb(128, 191, 64)`.
    #[must_use]
    pub fn css_rgb(&self) -> String {
        self.colour().to_string()
    }
}
