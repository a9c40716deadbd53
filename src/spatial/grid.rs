//! Fixed-size cell grid with collapse state and candidate domains
//!
//! Dimensions are set once at session start and never change; restart
//! replaces the whole grid. An implicit virtual boundary surrounds the
//! array: neighbor queries that step outside return `None`, and the
//! compatibility engine substitutes the boundary signature there.

use ndarray::Array2;

use crate::algorithm::bitset::VariantBitset;
use crate::spatial::direction::Direction;

/// One grid position with its candidate domain and collapse state
#[derive(Clone, Debug)]
pub struct Cell {
    /// Row of this cell
    pub row: usize,
    /// Column of this cell
    pub col: usize,
    /// Whether the cell has been fixed to a single variant
    pub collapsed: bool,
    /// Variants still legal for this cell; empty once collapsed
    pub domain: VariantBitset,
    /// The variant this cell collapsed to, set exactly once
    pub chosen: Option<usize>,
    /// Cached domain size, the selection heuristic
    pub entropy: usize,
}

impl Cell {
    /// Create an uncollapsed cell whose domain holds the whole tile set
    pub fn fresh(row: usize, col: usize, variant_count: usize) -> Self {
        Self {
            row,
            col,
            collapsed: false,
            domain: VariantBitset::full(variant_count),
            chosen: None,
            entropy: variant_count,
        }
    }

    /// Replace the domain and refresh the cached entropy
    pub fn set_domain(&mut self, domain: VariantBitset) {
        self.entropy = domain.count();
        self.domain = domain;
    }

    /// One-way transition into the collapsed state
    ///
    /// Clears the domain, zeroes the entropy, and pins the chosen variant.
    /// There is no reverse transition.
    pub fn collapse_to(&mut self, variant: usize) {
        self.collapsed = true;
        self.chosen = Some(variant);
        self.domain.clear();
        self.entropy = 0;
    }
}

/// Fixed-size 2-D array of cells
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Allocate a grid with every cell holding the full domain
    pub fn new(rows: usize, cols: usize, variant_count: usize) -> Self {
        let cells = Array2::from_shape_fn((rows, cols), |(row, col)| {
            Cell::fresh(row, col, variant_count)
        });
        Self { cells }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Cell at a position, if in bounds
    pub fn get(&self, pos: [usize; 2]) -> Option<&Cell> {
        self.cells.get(pos)
    }

    /// Mutable cell at a position, if in bounds
    pub fn get_mut(&mut self, pos: [usize; 2]) -> Option<&mut Cell> {
        self.cells.get_mut(pos)
    }

    /// Neighboring position in a direction, `None` past the boundary
    pub fn neighbor(&self, pos: [usize; 2], direction: Direction) -> Option<[usize; 2]> {
        let delta = direction.offset();
        let row = pos[0] as i32 + delta[0];
        let col = pos[1] as i32 + delta[1];
        let in_bounds =
            row >= 0 && col >= 0 && (row as usize) < self.rows() && (col as usize) < self.cols();
        in_bounds.then_some([row as usize, col as usize])
    }

    /// In-bounds neighbors that have not collapsed yet, in socket order
    pub fn open_neighbors(&self, pos: [usize; 2]) -> Vec<[usize; 2]> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| self.neighbor(pos, direction))
            .filter(|&npos| self.get(npos).is_some_and(|cell| !cell.collapsed))
            .collect()
    }

    /// Positions of every uncollapsed cell in row-major order
    pub fn open_positions(&self) -> Vec<[usize; 2]> {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| !cell.collapsed)
            .map(|((row, col), _)| [row, col])
            .collect()
    }

    /// Whether every cell has collapsed
    pub fn fully_collapsed(&self) -> bool {
        self.cells.iter().all(|cell| cell.collapsed)
    }
}
