use crate::core::actions::generate_pixel_buffer::value_range::ValueRange;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKinds;

pub const DEFAULT_MAX_ITERATIONS: f64 = 200.0;
pub const DEFAULT_NUMBER_POINTS: usize = 300;

/// Everything needed to render one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    pub kind: FractalKinds,
    pub center: Complex,
    pub zoom: f64,
    /// Fractional values are truncated toward zero.
    pub max_iterations: f64,
    pub number_points: usize,
    pub smoothing: bool,
    pub colour_map: ColourMapKinds,
    pub value_range: ValueRange,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self::mandelbrot()
    }
}

impl RenderParams {
    #[must_use]
    pub fn mandelbrot() -> Self {
        Self::for_kind(FractalKinds::Mandelbrot)
    }

    #[must_use]
    pub fn julia(c: Complex) -> Self {
        Self::for_kind(FractalKinds::Julia { c })
    }

    fn for_kind(kind: FractalKinds) -> Self {
        Self {
            kind,
            center: kind.default_center(),
            zoom: 1.0,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            number_points: DEFAULT_NUMBER_POINTS,
            smoothing: false,
            colour_map: ColourMapKinds::default(),
            value_range: ValueRange::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_fractal_kind() {
        let mandelbrot = RenderParams::default();
        let julia = RenderParams::julia(Complex::new(-1.0, 0.0));

        assert_eq!(mandelbrot.center, Complex::new(-0.5, 0.0));
        assert_eq!(julia.center, Complex::ZERO);
        assert_eq!(mandelbrot.max_iterations, 200.0);
        assert_eq!(julia.number_points, 300);
        assert!(!julia.smoothing);
    }
}
