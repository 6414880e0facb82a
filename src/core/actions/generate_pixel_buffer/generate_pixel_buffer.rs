use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::actions::generate_pixel_buffer::value_range::{ValueRange, normalise};
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError {
    ShapeMismatch { expected: usize, actual: usize },
    ColourMap(ColourMapError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "expected {} values, got {}", expected, actual)
            }
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ShapeMismatch { .. } => None,
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

impl From<ColourMapError> for GeneratePixelBufferError {
    fn from(err: ColourMapError) -> Self {
        Self::ColourMap(err)
    }
}

/// Colours a square row-major field of values.
///
/// Field row 0 is the bottom of the plane, so it becomes the last image row.
pub fn generate_pixel_buffer<CMap: ColourMap + ?Sized>(
    values: &[f64],
    number_points: usize,
    mapper: &CMap,
    range: ValueRange,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let expected = number_points * number_points;
    if values.len() != expected {
        return Err(GeneratePixelBufferError::ShapeMismatch {
            expected,
            actual: values.len(),
        });
    }

    let (vmin, vmax) = range.resolve(values);
    let mut buffer: PixelBufferData = Vec::with_capacity(expected * 3);

    for row in values.chunks(number_points.max(1)).rev() {
        for &value in row {
            let colour = mapper.map(normalise(value, vmin, vmax))?;

            buffer.push(colour.r);
            buffer.push(colour.g);
            buffer.push(colour.b);
        }
    }

    let side = number_points as u32;
    Ok(PixelBuffer::from_data(side, side, buffer)?)
}
