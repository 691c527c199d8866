use std::path::Path;
use std::time::Instant;

use log::info;

use crate::controllers::ports::file_presenter::{FilePresenterPort, WriteImageError};
use crate::core::actions::generate_gradient::generate_gradient::generate_gradient;
use crate::core::actions::generate_gradient::generate_gradient_rayon::generate_gradient_rayon;
use crate::core::colour_mapping::transition_colour_map::TransitionColourMap;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;

/// Renders the gradient strip and hands it to a file presenter.
pub struct GradientCliController<P: FilePresenterPort> {
    presenter: P,
    parallel: bool,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> GradientCliController<P> {
    pub fn new(presenter: P, parallel: bool) -> Self {
        Self {
            presenter,
            parallel,
            buffer: None,
        }
    }

    pub fn generate(&mut self, width: u32, height: u32) -> Result<(), Box<dyn std::error::Error>> {
        let pixel_rect = PixelRect::with_size(width, height)?;
        let colour_map = TransitionColourMap::new();

        info!("Rendering gradient strip {}x{}", width, height);

        let start = Instant::now();
        let buffer = if self.parallel {
            generate_gradient_rayon(pixel_rect, &colour_map)?
        } else {
            generate_gradient(pixel_rect, &colour_map)?
        };

        info!("Duration: {:?}", start.elapsed());

        self.buffer = Some(buffer);

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Writes the last generated strip; does nothing before [`Self::generate`].
    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), WriteImageError> {
        if let Some(buffer) = &self.buffer {
            let filepath = filepath.as_ref();

            if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }

            self.presenter.present(buffer, filepath)?;
            info!("Saved to {}", filepath.display());
        }

        Ok(())
    }
}
