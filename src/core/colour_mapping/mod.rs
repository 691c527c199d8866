pub mod calculate_colour;
pub mod errors;
pub mod transition_colour_map;
