use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn buffer_size_for(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
    HeightMismatch {
        left: u32,
        right: u32,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "expected {} bytes of pixel data, got {}",
                    expected_size, buffer_size
                )
            }
            Self::PixelOutsideBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} buffer",
                    x, y, width, height
                )
            }
            Self::HeightMismatch { left, right } => {
                write!(
                    f,
                    "cannot join buffers of height {} and {} side by side",
                    left, right
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB bytes, top image row first.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; buffer_size_for(width, height)],
        }
    }

    pub fn from_data(
        width: u32,
        height: u32,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected_size = buffer_size_for(width, height);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    /// `left` and `right` joined horizontally into one wider buffer.
    pub fn side_by_side(left: &Self, right: &Self) -> Result<Self, PixelBufferError> {
        if left.height != right.height {
            return Err(PixelBufferError::HeightMismatch {
                left: left.height,
                right: right.height,
            });
        }

        let left_row = (left.width as usize * BYTES_PER_PIXEL).max(1);
        let right_row = (right.width as usize * BYTES_PER_PIXEL).max(1);
        let mut buffer = Vec::with_capacity(left.buffer.len() + right.buffer.len());

        for (l, r) in left.buffer.chunks(left_row).zip(right.buffer.chunks(right_row)) {
            buffer.extend_from_slice(l);
            buffer.extend_from_slice(r);
        }

        Self::from_data(left.width + right.width, left.height, buffer)
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), PixelBufferError> {
        if x >= self.width || y >= self.height {
            return Err(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        let index = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }
}
