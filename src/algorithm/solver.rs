//! Session lifecycle and the collapse loop
//!
//! One [`Session`] owns the grid, tile set, frontier, and RNG for a solve;
//! nothing is ambient. Each step refreshes the frontier's domains, picks
//! the lowest-entropy cell, and collapses it to a weighted choice. The loop
//! halts when every cell has collapsed or a contradiction surfaces, and a
//! halted session only leaves that state through [`Session::restart`].

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::compatibility::refreshed_domain;
use crate::algorithm::frontier::Frontier;
use crate::algorithm::selection::WeightTable;
use crate::io::error::{Result, SolverError};
use crate::spatial::grid::Grid;
use crate::tiles::catalog::CatalogEntry;
use crate::tiles::set::{TileSet, TileVariant};

/// Lifecycle of a solver session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolverState {
    /// Cells remain to collapse
    Running,
    /// Every cell collapsed successfully; terminal
    HaltedComplete,
    /// A cell's domain emptied before collapse; terminal
    HaltedContradiction,
}

impl SolverState {
    /// Whether the session reached a terminal state
    pub const fn is_halted(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Rendering collaborator notified of every successful collapse
///
/// Invoked exactly once per collapsed cell, never on a contradiction. The
/// core only calls this interface; drawing lives with the host.
pub trait RenderSink {
    /// Record that `variant` was fixed at (`row`, `col`)
    fn render(&mut self, variant: &TileVariant, row: usize, col: usize);
}

/// Sink that discards every render event
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRender;

impl RenderSink for NullRender {
    fn render(&mut self, _variant: &TileVariant, _row: usize, _col: usize) {}
}

/// One solver session owning grid, tile set, frontier, and RNG
#[derive(Debug)]
pub struct Session {
    catalog: Vec<CatalogEntry>,
    tiles: TileSet,
    grid: Grid,
    frontier: Frontier,
    rng: StdRng,
    state: SolverState,
    collapsed: usize,
}

impl Session {
    /// Start a session over `catalog` with a `rows` x `cols` grid
    ///
    /// Validates the catalog and dimensions before any grid work, expands
    /// the tile set, and seeds the frontier with one random cell. Sessions
    /// built from the same catalog, dimensions, and seed replay the same
    /// sequence of collapses.
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed catalog (socket count, rotation
    /// range, missing rotations, weight sign, empty catalog) or a zero
    /// grid dimension.
    pub fn new(catalog: Vec<CatalogEntry>, rows: usize, cols: usize, seed: u64) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(SolverError::ZeroGridDimension { rows, cols });
        }

        let tiles = TileSet::from_catalog(&catalog)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = Grid::new(rows, cols, tiles.len());
        let frontier = Frontier::seeded(rows, cols, &mut rng);

        Ok(Self {
            catalog,
            tiles,
            grid,
            frontier,
            rng,
            state: SolverState::Running,
            collapsed: 0,
        })
    }

    /// Discard and rebuild the whole session state
    ///
    /// Reuses the stored catalog and grid dimensions. A `seed` of `None`
    /// draws a fresh seed from the operating system, so only explicit
    /// seeds reproduce. This is the only way out of a halted state.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored catalog fails re-validation; it was
    /// validated at construction, so this does not occur in practice.
    pub fn restart(&mut self, seed: Option<u64>) -> Result<()> {
        let rows = self.grid.rows();
        let cols = self.grid.cols();

        self.tiles = TileSet::from_catalog(&self.catalog)?;
        self.rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.grid = Grid::new(rows, cols, self.tiles.len());
        self.frontier = Frontier::seeded(rows, cols, &mut self.rng);
        self.state = SolverState::Running;
        self.collapsed = 0;

        Ok(())
    }

    /// Current lifecycle state
    pub const fn state(&self) -> SolverState {
        self.state
    }

    /// The session grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The expanded tile set
    pub const fn tiles(&self) -> &TileSet {
        &self.tiles
    }

    /// Number of cells collapsed so far
    pub const fn collapsed_cells(&self) -> usize {
        self.collapsed
    }

    /// Advance one collapse without render notifications
    ///
    /// No-op once halted. Returns the state after the step.
    pub fn step(&mut self) -> SolverState {
        self.step_with(&mut NullRender)
    }

    /// Advance one collapse, notifying `renderer` of a successful one
    ///
    /// One external tick performs at most one collapse: refresh the
    /// frontier's domains, pick uniformly among the lowest-entropy cells,
    /// and collapse the winner. No-op once halted.
    pub fn step_with(&mut self, renderer: &mut dyn RenderSink) -> SolverState {
        if self.state.is_halted() {
            return self.state;
        }

        if self.frontier.is_empty() {
            self.frontier.refill_from(&self.grid);
        }

        for pos in self.frontier.positions().to_vec() {
            self.refresh_domain(pos);
        }

        let candidates = self.lowest_entropy_candidates();
        if candidates.is_empty() {
            self.state = SolverState::HaltedComplete;
            return self.state;
        }

        let winner = candidates
            .get(self.rng.random_range(0..candidates.len()))
            .copied()
            .unwrap_or([0, 0]);
        self.collapse(winner, renderer);

        self.state
    }

    fn refresh_domain(&mut self, pos: [usize; 2]) {
        let domain = refreshed_domain(&self.grid, &self.tiles, pos);
        if let Some(cell) = self.grid.get_mut(pos) {
            if !cell.collapsed {
                cell.set_domain(domain);
            }
        }
    }

    /// Frontier cells sharing the minimum entropy, in frontier order
    fn lowest_entropy_candidates(&self) -> Vec<[usize; 2]> {
        let mut lowest = usize::MAX;
        let mut candidates = Vec::new();

        for &pos in self.frontier.positions() {
            let Some(cell) = self.grid.get(pos) else {
                continue;
            };
            if cell.collapsed {
                continue;
            }
            if cell.entropy < lowest {
                lowest = cell.entropy;
                candidates.clear();
                candidates.push(pos);
            } else if cell.entropy == lowest {
                candidates.push(pos);
            }
        }

        candidates
    }

    /// Fix the cell at `pos` to one weighted choice and reset the frontier
    ///
    /// An empty domain is the contradiction: the session halts with no
    /// tile assigned, no render event, and no frontier update.
    fn collapse(&mut self, pos: [usize; 2], renderer: &mut dyn RenderSink) {
        let Some(cell) = self.grid.get(pos) else {
            return;
        };

        if cell.domain.is_empty() {
            self.state = SolverState::HaltedContradiction;
            return;
        }

        let choices = cell.domain.to_vec();
        let weights: Vec<f64> = choices
            .iter()
            .filter_map(|&variant| self.tiles.variant(variant).map(|v| v.weight))
            .collect();
        let table = WeightTable::new(&weights);
        let draw = self.rng.random::<f64>() * table.total();
        let Some(&chosen) = choices.get(table.pick(draw)) else {
            return;
        };

        if let Some(cell) = self.grid.get_mut(pos) {
            cell.collapse_to(chosen);
        }
        self.collapsed += 1;

        if let Some(variant) = self.tiles.variant(chosen) {
            renderer.render(variant, pos[0], pos[1]);
        }

        self.frontier.replace(self.grid.open_neighbors(pos));
    }
}
