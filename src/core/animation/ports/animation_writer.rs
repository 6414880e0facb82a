use std::error::Error;
use std::path::{Path, PathBuf};

pub trait AnimationWriterPort: Send + Sync {
    /// Encodes `frames` in the given order, one image per entry.
    fn write(
        &self,
        frames: &[PathBuf],
        output: &Path,
        fps: f64,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;
}
