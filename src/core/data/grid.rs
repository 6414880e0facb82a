use crate::core::data::complex::Complex;

/// Square lattice of sample points, stored row-major.
///
/// Row 0 holds the smallest imaginary value and column 0 the smallest real
/// value, so the grid reads like the complex plane with its origin at the
/// bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    number_points: usize,
    points: Vec<Complex>,
}

impl Grid {
    pub(crate) fn from_axes(reals: &[f64], imags: &[f64]) -> Self {
        debug_assert_eq!(reals.len(), imags.len());

        let points = imags
            .iter()
            .flat_map(|&imag| reals.iter().map(move |&real| Complex { real, imag }))
            .collect();

        Self {
            number_points: reals.len(),
            points,
        }
    }

    #[must_use]
    pub fn number_points(&self) -> usize {
        self.number_points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn points(&self) -> &[Complex] {
        &self.points
    }

    #[must_use]
    pub fn point(&self, row: usize, column: usize) -> Option<Complex> {
        if row >= self.number_points || column >= self.number_points {
            return None;
        }

        self.points.get(row * self.number_points + column).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Complex]> {
        self.points.chunks(self.number_points.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_imaginary_axis() {
        let grid = Grid::from_axes(&[-1.0, 0.0, 1.0], &[-2.0, 0.0, 2.0]);

        assert_eq!(grid.number_points(), 3);
        assert_eq!(grid.len(), 9);
        assert_eq!(grid.point(0, 0), Some(Complex::new(-1.0, -2.0)));
        assert_eq!(grid.point(0, 2), Some(Complex::new(1.0, -2.0)));
        assert_eq!(grid.point(2, 0), Some(Complex::new(-1.0, 2.0)));
        assert_eq!(grid.point(1, 1), Some(Complex::new(0.0, 0.0)));
    }

    #[test]
    fn test_point_out_of_range() {
        let grid = Grid::from_axes(&[0.0, 1.0], &[0.0, 1.0]);

        assert_eq!(grid.point(2, 0), None);
        assert_eq!(grid.point(0, 2), None);
    }

    #[test]
    fn test_rows_iterator() {
        let grid = Grid::from_axes(&[0.0, 1.0], &[5.0, 6.0]);
        let rows: Vec<&[Complex]> = grid.rows().collect();

        assert_eq!(rows.len(), 2);
        assert!(rows[0].iter().all(|p| p.imag == 5.0));
        assert!(rows[1].iter().all(|p| p.imag == 6.0));
    }
}
