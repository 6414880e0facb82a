use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid::Grid;
use crate::core::data::viewport::{Viewport, ViewportError};

/// `n` evenly spaced samples over `[lo, hi]`, both ends included.
///
/// A single sample sits on `lo`.
#[must_use]
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let last = (n - 1) as f64;
            (0..n)
                .map(|k| {
                    if k == n - 1 {
                        hi
                    } else {
                        lo + (hi - lo) * (k as f64 / last)
                    }
                })
                .collect()
        }
    }
}

/// Maps a `(center, zoom)` view to its bounds and a square grid of samples.
pub fn map_viewport(
    center: Complex,
    zoom: f64,
    number_points: usize,
) -> Result<(ComplexRect, Grid), ViewportError> {
    if number_points < 1 {
        return Err(ViewportError::InvalidNumberPoints { number_points });
    }

    let bounds = Viewport::new(center, zoom)?.bounds()?;
    let reals = linspace(bounds.real_lo(), bounds.real_hi(), number_points);
    let imags = linspace(bounds.imag_lo(), bounds.imag_hi(), number_points);

    Ok((bounds, Grid::from_axes(&reals, &imags)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
        assert!(linspace(3.0, 7.0, 0).is_empty());
    }

    #[test]
    fn test_grid_corners_match_bounds() {
        for number_points in [2, 3, 10, 301] {
            let (bounds, grid) =
                map_viewport(Complex::new(-0.5, 0.25), 3.0, number_points).unwrap();
            let last = number_points - 1;

            let bottom_left = grid.point(0, 0).unwrap();
            let top_right = grid.point(last, last).unwrap();

            assert!((bottom_left.real - bounds.real_lo()).abs() < TOLERANCE);
            assert!((bottom_left.imag - bounds.imag_lo()).abs() < TOLERANCE);
            assert!((top_right.real - bounds.real_hi()).abs() < TOLERANCE);
            assert!((top_right.imag - bounds.imag_hi()).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_odd_grid_midpoint_is_center() {
        let center = Complex::new(-0.743643887037158, 0.131825904205311);

        for number_points in [3, 11, 601] {
            let (_, grid) = map_viewport(center, 250.0, number_points).unwrap();
            let mid = number_points / 2;
            let sample = grid.point(mid, mid).unwrap();

            assert!((sample.real - center.real).abs() < TOLERANCE);
            assert!((sample.imag - center.imag).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_columns_move_along_real_axis_and_rows_along_imaginary() {
        let (_, grid) = map_viewport(Complex::ZERO, 1.0, 4).unwrap();

        let origin = grid.point(0, 0).unwrap();
        let right = grid.point(0, 1).unwrap();
        let up = grid.point(1, 0).unwrap();

        assert!(right.real > origin.real);
        assert_eq!(right.imag, origin.imag);
        assert!(up.imag > origin.imag);
        assert_eq!(up.real, origin.real);
    }

    #[test]
    fn test_single_point_grid() {
        let (bounds, grid) = map_viewport(Complex::ZERO, 1.0, 1).unwrap();

        assert_eq!(grid.len(), 1);
        assert_eq!(grid.point(0, 0), Some(bounds.lower_left()));
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        assert_eq!(
            map_viewport(Complex::ZERO, 1.0, 0),
            Err(ViewportError::InvalidNumberPoints { number_points: 0 })
        );
        assert_eq!(
            map_viewport(Complex::ZERO, 0.0, 10),
            Err(ViewportError::InvalidZoom { zoom: 0.0 })
        );
    }
}
