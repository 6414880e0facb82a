use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid::Grid;
use crate::core::data::iteration_field::{EscapeResult, IterationField};

/// Generates the iteration field in parallel using rayon's work-stealing scheduler.
///
/// Rows are the unit of work. Cells never read each other's state, so the only
/// synchronisation is the final collect, which keeps row-major order and
/// matches [`generate_fractal`](super::generate_fractal::generate_fractal)
/// cell for cell.
pub fn generate_fractal_parallel_rayon<Alg>(grid: &Grid, algorithm: &Alg) -> IterationField
where
    Alg: FractalAlgorithm + Sync,
{
    let row_width = grid.number_points().max(1);

    let rows: Vec<Vec<EscapeResult>> = grid
        .points()
        .par_chunks(row_width)
        .map(|row| row.iter().map(|&point| algorithm.compute(point)).collect())
        .collect();

    IterationField::from_cells(grid.number_points(), rows.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
    use crate::core::data::complex::Complex;
    use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
    use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
    use crate::core::util::map_viewport::map_viewport;

    #[derive(Debug)]
    struct StubAlgorithm {}

    impl FractalAlgorithm for StubAlgorithm {
        fn compute(&self, point: Complex) -> EscapeResult {
            EscapeResult {
                count: point.real + 10.0 * point.imag,
                z: point,
            }
        }

        fn max_iterations(&self) -> u32 {
            1
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let (_, grid) = map_viewport(Complex::new(-0.5, 0.0), 1.0, 64).unwrap();
        let algorithm = MandelbrotAlgorithm::new(100.0).unwrap();

        let sequential = generate_fractal(&grid, &algorithm);
        let parallel = generate_fractal_parallel_rayon(&grid, &algorithm);

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_rayon_julia_matches_sequential() {
        let (_, grid) = map_viewport(Complex::ZERO, 1.0, 33).unwrap();
        let algorithm = JuliaAlgorithm::new(Complex::new(0.0, 1.0), 80.0).unwrap();

        assert_eq!(
            generate_fractal_parallel_rayon(&grid, &algorithm),
            generate_fractal(&grid, &algorithm)
        );
    }

    #[test]
    fn test_rayon_preserves_row_major_order() {
        let (_, grid) = map_viewport(Complex::ZERO, 1.0, 9).unwrap();
        let field = generate_fractal_parallel_rayon(&grid, &StubAlgorithm {});

        for (cell, point) in field.cells().iter().zip(grid.points()) {
            assert_eq!(cell.z, *point);
        }
    }

    #[test]
    fn test_rayon_with_single_point() {
        let (_, grid) = map_viewport(Complex::ZERO, 1.0, 1).unwrap();
        let field = generate_fractal_parallel_rayon(&grid, &StubAlgorithm {});

        assert_eq!(field.cells().len(), 1);
    }
}
