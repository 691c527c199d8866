//! Conversions between the core raster and presentation surfaces.

pub mod pixel_format;
