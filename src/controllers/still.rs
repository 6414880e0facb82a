use std::error::Error;
use std::path::Path;

use log::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::render_frame::{RenderFrameError, render_frame};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_params::RenderParams;

/// Renders a single image and hands it to a file presenter.
pub struct StillController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> StillController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, params: &RenderParams) -> Result<(), RenderFrameError> {
        info!(
            "rendering {} at {} {:+}i, zoom {}, {} points, max_iter {}",
            params.kind,
            params.center.real,
            params.center.imag,
            params.zoom,
            params.number_points,
            params.max_iterations
        );

        self.buffer = Some(render_frame(params)?);

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Does nothing until [`generate`](Self::generate) has succeeded.
    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), Box<dyn Error + Send + Sync>> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath.as_ref())?;
            info!("saved {}", filepath.as_ref().display());
        }

        Ok(())
    }
}
