use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapFailure};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError {
    ColourMap(ColourMapFailure),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err.as_ref()),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Generates a pixel buffer by mapping row-major input values to colours.
///
/// The input must hold exactly one value per pixel of `pixel_rect`.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * BYTES_PER_PIXEL);

    for value in input {
        let Colour { r, g, b } = mapper
            .map(value)
            .map_err(GeneratePixelBufferError::ColourMap)?;

        buffer.extend_from_slice(&[r, g, b]);
    }

    Ok(PixelBuffer::from_data(pixel_rect, buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_mapping::transition_colour_map::TransitionColourMap;

    #[derive(Debug)]
    struct StubError {}

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    struct StubColourMapSuccess {}

    impl ColourMap<u8> for StubColourMapSuccess {
        fn map(&self, value: u8) -> Result<Colour, ColourMapFailure> {
            Ok(Colour { r: value, g: value, b: value })
        }

        fn display_name(&self) -> &str {
            "Stub success"
        }
    }

    struct StubColourMapFailure {}

    impl ColourMap<u8> for StubColourMapFailure {
        fn map(&self, _: u8) -> Result<Colour, ColourMapFailure> {
            Err(Box::new(StubError {}))
        }

        fn display_name(&self) -> &str {
            "Stub failure"
        }
    }

    #[test]
    fn test_generate_pixel_buffer_maps_every_value() {
        let pixel_rect = PixelRect::with_size(2, 2).unwrap();

        let buffer =
            generate_pixel_buffer(vec![1, 2, 3, 4], &StubColourMapSuccess {}, pixel_rect).unwrap();

        assert_eq!(buffer.buffer(), &vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4]);
    }

    #[test]
    fn test_generate_pixel_buffer_propagates_colour_map_failure() {
        let pixel_rect = PixelRect::with_size(2, 1).unwrap();

        let result = generate_pixel_buffer(vec![1, 2], &StubColourMapFailure {}, pixel_rect);

        let err = result.unwrap_err();
        assert!(matches!(err, GeneratePixelBufferError::ColourMap(_)));
        assert_eq!(err.to_string(), "colour map error: StubError");
    }

    #[test]
    fn test_generate_pixel_buffer_rejects_wrong_input_length() {
        let pixel_rect = PixelRect::with_size(2, 2).unwrap();

        let result = generate_pixel_buffer(vec![1, 2, 3], &StubColourMapSuccess {}, pixel_rect);

        assert!(matches!(
            result,
            Err(GeneratePixelBufferError::PixelBuffer(
                PixelBufferError::BoundsMismatch {
                    pixel_rect_size: 12,
                    buffer_size: 9
                }
            ))
        ));
    }

    #[test]
    fn test_generate_pixel_buffer_with_transition_map() {
        let pixel_rect = PixelRect::with_size(3, 1).unwrap();

        let buffer =
            generate_pixel_buffer(vec![0.0, 0.5, 1.0], &TransitionColourMap::new(), pixel_rect)
                .unwrap();

        assert_eq!(buffer.buffer(), &vec![255, 255, 0, 0, 127, 128, 0, 0, 192]);
    }

    #[test]
    fn test_generate_pixel_buffer_surfaces_out_of_range_position() {
        let pixel_rect = PixelRect::with_size(2, 1).unwrap();

        let result =
            generate_pixel_buffer(vec![0.0, 1.25], &TransitionColourMap::new(), pixel_rect);

        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "colour map error: transition position 1.25 is outside [0, 1]"
        );
    }
}
