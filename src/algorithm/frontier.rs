//! Working set of cells whose domains may be stale
//!
//! Holds positions rather than cell borrows so the solver can mutate the
//! grid while walking the set. Starts as one random cell and is replaced
//! wholesale with the latest collapse's open neighbors after every
//! placement; when it drains, the solver refills it from the whole grid.

use rand::{Rng, rngs::StdRng};

use crate::spatial::grid::Grid;

/// Cells pending domain re-evaluation
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    positions: Vec<[usize; 2]>,
}

impl Frontier {
    /// Frontier holding a single randomly chosen cell
    pub fn seeded(rows: usize, cols: usize, rng: &mut StdRng) -> Self {
        let row = rng.random_range(0..rows);
        let col = rng.random_range(0..cols);
        Self {
            positions: vec![[row, col]],
        }
    }

    /// Positions currently awaiting refresh
    pub fn positions(&self) -> &[[usize; 2]] {
        &self.positions
    }

    /// Whether no cell is awaiting refresh
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Replace the working set wholesale
    pub fn replace(&mut self, positions: Vec<[usize; 2]>) {
        self.positions = positions;
    }

    /// Reset to every uncollapsed cell of the grid in row-major order
    pub fn refill_from(&mut self, grid: &Grid) {
        self.positions = grid.open_positions();
    }
}
