use crate::controllers::ports::file_presenter::{FilePresenterPort, WriteImageError};
use crate::core::data::pixel_buffer::PixelBuffer;
use image::{ImageFormat, RgbImage};
use std::path::Path;

/// Writes 8-bit RGB PNG images.
#[derive(Debug, Default)]
pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> Result<(), WriteImageError> {
        let width = buffer.pixel_rect().width();
        let height = buffer.pixel_rect().height();

        let image = RgbImage::from_raw(width, height, buffer.buffer().clone()).ok_or(
            WriteImageError::BufferMismatch {
                width,
                height,
                buffer_size: buffer.buffer_size(),
            },
        )?;

        image.save_with_format(filepath, ImageFormat::Png)?;

        Ok(())
    }
}

impl PngFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
