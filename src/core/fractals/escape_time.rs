//! The `z ← z² + c` state machine shared by every escape-time fractal.

use crate::core::data::complex::Complex;
use crate::core::data::iteration_field::EscapeResult;
use crate::core::fractals::errors::EngineError;

/// Bailout bound on `|z|`.
///
/// Far past the classical radius of 2 so the last iterate carries enough
/// magnitude for continuous colouring.
pub const ESCAPE_RADIUS: f64 = 1e8;

const ESCAPE_RADIUS_SQUARED: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

/// Truncates a caller-supplied iteration cap toward zero and checks it is a
/// usable positive count.
pub fn max_iterations_from(max_iterations: f64) -> Result<u32, EngineError> {
    let truncated = max_iterations.trunc();

    if !truncated.is_finite() || truncated < 1.0 || truncated > f64::from(u32::MAX) {
        return Err(EngineError::InvalidMaxIterations { max_iterations });
    }

    Ok(truncated as u32)
}

/// Runs one cell until `|z|` exceeds [`ESCAPE_RADIUS`] or `max_iterations`
/// steps have been taken.
#[inline]
#[must_use]
pub fn escape(z0: Complex, c: Complex, max_iterations: u32) -> EscapeResult {
    let mut z = z0;
    let mut count = 0u32;

    while z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED && count < max_iterations {
        z = z * z + c;
        count += 1;
    }

    EscapeResult {
        count: f64::from(count),
        z,
    }
}
