use log::debug;
use rayon::prelude::*;

use crate::core::actions::generate_gradient::generate_gradient::gradient_sample_positions;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::pixel_rect::PixelRect;

/// Renders the same strip as
/// [`generate_gradient`](crate::core::actions::generate_gradient::generate_gradient::generate_gradient)
/// using rayon.
///
/// Columns are mapped in parallel, then the finished row is copied into every
/// row of the buffer in parallel. Output is byte-identical to the sequential
/// version.
pub fn generate_gradient_rayon<CMap>(
    pixel_rect: PixelRect,
    mapper: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    CMap: ColourMap<f64> + Sync,
{
    debug!(
        "generating {}x{} gradient with {} on {} threads",
        pixel_rect.width(),
        pixel_rect.height(),
        mapper.display_name(),
        rayon::current_num_threads()
    );

    let colours: Vec<Colour> = gradient_sample_positions(pixel_rect.width())
        .into_par_iter()
        .map(|t| mapper.map(t))
        .collect::<Result<_, _>>()
        .map_err(GeneratePixelBufferError::ColourMap)?;

    let row: Vec<u8> = colours
        .iter()
        .flat_map(|colour| [colour.r, colour.g, colour.b])
        .collect();

    let row_len = pixel_rect.width() as usize * BYTES_PER_PIXEL;
    let mut data = vec![0; row_len * pixel_rect.height() as usize];

    data.par_chunks_mut(row_len)
        .for_each(|dst| dst.copy_from_slice(&row));

    Ok(PixelBuffer::from_data(pixel_rect, data)?)
}
