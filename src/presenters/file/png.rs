use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use image::{ImageFormat, RgbImage};
use std::error::Error;
use std::path::Path;

pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    fn present(
        &self,
        buffer: &PixelBuffer,
        filepath: impl AsRef<Path>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let image = RgbImage::from_raw(buffer.width(), buffer.height(), buffer.buffer().clone())
            .ok_or("pixel buffer is smaller than its dimensions")?;

        image.save_with_format(filepath, ImageFormat::Png)?;

        Ok(())
    }
}

impl Default for PngFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PngFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
