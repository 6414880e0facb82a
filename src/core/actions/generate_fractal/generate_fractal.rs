use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid::Grid;
use crate::core::data::iteration_field::IterationField;

/// Single-threaded reference implementation.
pub fn generate_fractal<Alg: FractalAlgorithm>(grid: &Grid, algorithm: &Alg) -> IterationField {
    let cells = grid
        .points()
        .iter()
        .map(|&point| algorithm.compute(point))
        .collect();

    IterationField::from_cells(grid.number_points(), cells)
}
