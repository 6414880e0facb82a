//! Continuous colouring for escape-time counts.

use crate::core::data::complex::Complex;
use crate::core::data::iteration_field::IterationField;

/// `count + 1 - log2(log2(|z|))` for escaped cells, `count` for bounded ones.
///
/// Iterates with `|z| <= 1` have no meaningful correction and come back as a
/// non-finite value. Only that cell is affected and nothing panics; the
/// renderer decides how to show it.
#[inline]
#[must_use]
pub fn smooth(count: f64, z: Complex, max_iterations: u32) -> f64 {
    if count < f64::from(max_iterations) {
        count + 1.0 - z.magnitude().log2().log2()
    } else {
        count
    }
}

/// Smoothed values for every cell, row-major.
#[must_use]
pub fn apply_smoothing(field: &IterationField, max_iterations: u32) -> Vec<f64> {
    field
        .cells()
        .iter()
        .map(|cell| smooth(cell.count, cell.z, max_iterations))
        .collect()
}
