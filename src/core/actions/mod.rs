pub mod generate_gradient;
pub mod generate_pixel_buffer;
