use crate::core::data::complex::Complex;

/// Terminal state of one escape-time cell.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeResult {
    pub count: f64,
    pub z: Complex,
}

/// Per-cell escape results laid out like the [`Grid`](crate::core::data::grid::Grid)
/// they were computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationField {
    number_points: usize,
    cells: Vec<EscapeResult>,
}

impl IterationField {
    pub(crate) fn from_cells(number_points: usize, cells: Vec<EscapeResult>) -> Self {
        debug_assert_eq!(cells.len(), number_points * number_points);

        Self {
            number_points,
            cells,
        }
    }

    #[must_use]
    pub fn number_points(&self) -> usize {
        self.number_points
    }

    #[must_use]
    pub fn cells(&self) -> &[EscapeResult] {
        &self.cells
    }

    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<EscapeResult> {
        if row >= self.number_points || column >= self.number_points {
            return None;
        }

        self.cells.get(row * self.number_points + column).copied()
    }

    /// Raw iteration counts in row-major order.
    #[must_use]
    pub fn counts(&self) -> Vec<f64> {
        self.cells.iter().map(|cell| cell.count).collect()
    }
}
