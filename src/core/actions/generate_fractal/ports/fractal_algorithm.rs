use crate::core::data::complex::Complex;
use crate::core::data::iteration_field::EscapeResult;

pub trait FractalAlgorithm {
    /// Iterates the cell seeded by `point` to its terminal state.
    fn compute(&self, point: Complex) -> EscapeResult;

    fn max_iterations(&self) -> u32;
}
