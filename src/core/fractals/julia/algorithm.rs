use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_field::EscapeResult;
use crate::core::fractals::errors::EngineError;
use crate::core::fractals::escape_time::{escape, max_iterations_from};

/// Orbit of the sample point under `z² + c` for a fixed `c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAlgorithm {
    c: Complex,
    max_iterations: u32,
}

impl FractalAlgorithm for JuliaAlgorithm {
    #[inline]
    fn compute(&self, point: Complex) -> EscapeResult {
        escape(point, self.c, self.max_iterations)
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl JuliaAlgorithm {
    pub fn new(c: Complex, max_iterations: f64) -> Result<Self, EngineError> {
        Ok(Self {
            c,
            max_iterations: max_iterations_from(max_iterations)?,
        })
    }

    #[must_use]
    pub fn c(&self) -> Complex {
        self.c
    }
}
