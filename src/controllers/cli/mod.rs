pub mod args;
pub mod gradient;
