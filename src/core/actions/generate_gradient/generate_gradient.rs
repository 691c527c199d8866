use log::debug;

use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    generate_pixel_buffer, GeneratePixelBufferError,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Labels drawn under the strip at its left edge, centre and right edge.
pub const GRADIENT_AXIS_LABELS: [&str; 3] = ["0.0", "0.5", "1.0"];

/// Transition positions for each column: `i / (width - 1)`.
///
/// A single column samples `0.0` and an empty strip samples nothing.
#[must_use]
pub fn gradient_sample_positions(width: u32) -> Vec<f64> {
    match width {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (width - 1) as f64;
            (0..width).map(|i| i as f64 / last).collect()
        }
    }
}

/// The top row of `pixel_rect`, used to map each column exactly once.
pub(crate) fn first_row(pixel_rect: PixelRect) -> PixelRect {
    let top = pixel_rect.top_left().y;

    // Same columns as an already valid rect, height 1 is always accepted.
    PixelRect::new(
        Point { x: pixel_rect.top_left().x, y: top },
        Point { x: pixel_rect.bottom_right().x, y: top },
    )
    .unwrap_or(pixel_rect)
}

/// Renders the horizontal gradient strip: column `i` is painted top to
/// bottom with `mapper.map(i / (width - 1))`.
pub fn generate_gradient<CMap: ColourMap<f64>>(
    pixel_rect: PixelRect,
    mapper: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    debug!(
        "generating {}x{} gradient with {}",
        pixel_rect.width(),
        pixel_rect.height(),
        mapper.display_name()
    );

    let row_rect = first_row(pixel_rect);
    let positions = gradient_sample_positions(pixel_rect.width());
    let row = generate_pixel_buffer(positions, mapper, row_rect)?;

    let mut buffer = PixelBuffer::new(pixel_rect);
    let top = row_rect.top_left().y;

    for x in row_rect.top_left().x..=row_rect.bottom_right().x {
        let colour = row.pixel(Point { x, y: top })?;
        buffer.paint_column(x, colour)?;
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_mapping::calculate_colour::calculate_colour;
    use crate::core::colour_mapping::transition_colour_map::TransitionColourMap;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_buffer::PixelBufferError;

    #[test]
    fn test_sample_positions_span_unit_interval() {
        assert_eq!(gradient_sample_positions(3), vec![0.0, 0.5, 1.0]);
        assert_eq!(gradient_sample_positions(5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_sample_positions_degenerate_widths() {
        assert!(gradient_sample_positions(0).is_empty());
        assert_eq!(gradient_sample_positions(1), vec![0.0]);
    }

    #[test]
    fn test_sample_positions_end_exactly_at_one() {
        let positions = gradient_sample_positions(400);

        assert_eq!(positions.len(), 400);
        assert_eq!(positions.first(), Some(&0.0));
        assert_eq!(positions.last(), Some(&1.0));
    }

    #[test]
    fn test_width_three_gradient_hits_reference_colours() {
        let pixel_rect = PixelRect::with_size(3, 4).unwrap();

        let buffer = generate_gradient(pixel_rect, &TransitionColourMap::new()).unwrap();

        let expected = [
            Colour { r: 255, g: 255, b: 0 },
            Colour { r: 0, g: 127, b: 128 },
            Colour { r: 0, g: 0, b: 192 },
        ];
        for y in 0..4 {
            for (x, colour) in expected.iter().enumerate() {
                assert_eq!(buffer.pixel(Point { x: x as i32, y }).unwrap(), *colour);
            }
        }
    }

    #[test]
    fn test_columns_are_uniform_stripes() {
        let pixel_rect = PixelRect::with_size(17, 5).unwrap();

        let buffer = generate_gradient(pixel_rect, &TransitionColourMap::new()).unwrap();

        for (x, t) in gradient_sample_positions(17).into_iter().enumerate() {
            for y in 0..5 {
                assert_eq!(
                    buffer.pixel(Point { x: x as i32, y }).unwrap(),
                    calculate_colour(t)
                );
            }
        }
    }

    #[test]
    fn test_gradient_with_offset_rect() {
        let pixel_rect = PixelRect::new(Point { x: 10, y: 20 }, Point { x: 12, y: 21 }).unwrap();

        let buffer = generate_gradient(pixel_rect, &TransitionColourMap::new()).unwrap();

        assert_eq!(buffer.pixel(Point { x: 10, y: 21 }).unwrap(), calculate_colour(0.0));
        assert_eq!(buffer.pixel(Point { x: 12, y: 20 }).unwrap(), calculate_colour(1.0));
        assert!(matches!(
            buffer.pixel(Point { x: 0, y: 0 }),
            Err(PixelBufferError::PixelOutsideBounds { .. })
        ));
    }

    #[test]
    fn test_first_row_keeps_columns() {
        let pixel_rect = PixelRect::new(Point { x: 3, y: 7 }, Point { x: 9, y: 12 }).unwrap();

        let row = first_row(pixel_rect);

        assert_eq!(row.top_left(), Point { x: 3, y: 7 });
        assert_eq!(row.bottom_right(), Point { x: 9, y: 7 });
    }
}
