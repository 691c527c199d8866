#[allow(clippy::module_inception)]
pub mod generate_gradient;
pub mod generate_gradient_rayon;
