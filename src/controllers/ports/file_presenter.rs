use std::error::Error;
use std::fmt;
use std::io;
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug)]
pub enum WriteImageError {
    Io(io::Error),
    Image(image::ImageError),
    BufferMismatch { width: u32, height: u32, buffer_size: usize },
}

impl fmt::Display for WriteImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {}", err),
            Self::Image(err) => write!(f, "image encoding error: {}", err),
            Self::BufferMismatch { width, height, buffer_size } => {
                write!(
                    f,
                    "buffer of {} bytes cannot hold a {}x{} RGB image",
                    buffer_size, width, height
                )
            }
        }
    }
}

impl Error for WriteImageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Image(err) => Some(err),
            Self::BufferMismatch { .. } => None,
        }
    }
}

impl From<io::Error> for WriteImageError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for WriteImageError {
    fn from(err: image::ImageError) -> Self {
        Self::Image(err)
    }
}

pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> Result<(), WriteImageError>;
}
