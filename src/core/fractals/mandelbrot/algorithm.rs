use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_field::EscapeResult;
use crate::core::fractals::errors::EngineError;
use crate::core::fractals::escape_time::{escape, max_iterations_from};

/// Orbit of zero under `z² + c`, with `c` taken from the sample point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    #[inline]
    fn compute(&self, point: Complex) -> EscapeResult {
        escape(Complex::ZERO, point, self.max_iterations)
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: f64) -> Result<Self, EngineError> {
        Ok(Self {
            max_iterations: max_iterations_from(max_iterations)?,
        })
    }
}
