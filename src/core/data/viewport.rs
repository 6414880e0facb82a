use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use std::error::Error;
use std::fmt;

/// Half extent of the view at `zoom == 1`, along both axes.
pub const BASE_HALF_EXTENT: f64 = 1.5;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidZoom { zoom: f64 },
    InvalidNumberPoints { number_points: usize },
    Bounds(ComplexRectError),
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoom { zoom } => {
                write!(f, "zoom must be a positive finite number, got {}", zoom)
            }
            Self::InvalidNumberPoints { number_points } => {
                write!(
                    f,
                    "number of points must be at least 1, got {}",
                    number_points
                )
            }
            Self::Bounds(err) => write!(f, "viewport bounds are degenerate: {}", err),
        }
    }
}

impl Error for ViewportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Bounds(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ComplexRectError> for ViewportError {
    fn from(err: ComplexRectError) -> Self {
        Self::Bounds(err)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    zoom: f64,
}

impl Viewport {
    pub fn new(center: Complex, zoom: f64) -> Result<Self, ViewportError> {
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(ViewportError::InvalidZoom { zoom });
        }

        Ok(Self { center, zoom })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// `center ± (1.5 + 1.5i) / zoom`.
    ///
    /// Fails only when the zoom is so deep that `f64` can no longer tell the
    /// two corners apart.
    pub fn bounds(&self) -> Result<ComplexRect, ViewportError> {
        let delta = Complex::new(BASE_HALF_EXTENT, BASE_HALF_EXTENT).scale(1.0 / self.zoom);

        Ok(ComplexRect::new(self.center - delta, self.center + delta)?)
    }
}
