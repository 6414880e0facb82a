use std::error::Error;
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

pub trait FilePresenterPort: Send + Sync {
    fn present(
        &self,
        buffer: &PixelBuffer,
        filepath: impl AsRef<Path>,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;
}
