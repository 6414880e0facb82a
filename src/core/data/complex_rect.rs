use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// Axis-aligned region of the complex plane.
///
/// Imaginary values grow upwards, so `lower_left` holds the smallest real and
/// imaginary parts and `upper_right` the largest.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    lower_left: Complex,
    upper_right: Complex,
}

impl ComplexRect {
    pub fn new(lower_left: Complex, upper_right: Complex) -> Result<Self, ComplexRectError> {
        let width = upper_right.real - lower_left.real;
        let height = upper_right.imag - lower_left.imag;

        // NaN widths fail this check too
        if !(width > 0.0 && height > 0.0) {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            lower_left,
            upper_right,
        })
    }

    #[must_use]
    pub fn lower_left(&self) -> Complex {
        self.lower_left
    }

    #[must_use]
    pub fn upper_right(&self) -> Complex {
        self.upper_right
    }

    #[must_use]
    pub fn real_lo(&self) -> f64 {
        self.lower_left.real
    }

    #[must_use]
    pub fn real_hi(&self) -> f64 {
        self.upper_right.real
    }

    #[must_use]
    pub fn imag_lo(&self) -> f64 {
        self.lower_left.imag
    }

    #[must_use]
    pub fn imag_hi(&self) -> f64 {
        self.upper_right.imag
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper_right.real - self.lower_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.upper_right.imag - self.lower_left.imag
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        (self.lower_left + self.upper_right).scale(0.5)
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.lower_left.real <= point.real
            && self.lower_left.imag <= point.imag
            && self.upper_right.real >= point.real
            && self.upper_right.imag >= point.imag
    }
}
