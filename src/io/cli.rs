//! Command-line interface for solving a grid and exporting it as a PNG

use crate::algorithm::solver::{Session, SolverState};
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_OUTPUT, STEP_LIMIT_SLACK,
};
use crate::io::error::Result;
use crate::io::image::PngRenderSink;
use crate::io::progress::SolveProgress;
use crate::tiles::catalog;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wavetile")]
#[command(
    author,
    version,
    about = "Solve a pipe-tile grid with wave function collapse and export it as a PNG"
)]
/// Command-line arguments for the grid solver
pub struct Cli {
    /// Grid rows
    #[arg(long, default_value_t = DEFAULT_GRID_ROWS)]
    pub rows: usize,

    /// Grid columns
    #[arg(long, default_value_t = DEFAULT_GRID_COLS)]
    pub cols: usize,

    /// Square pixel size of one rendered cell
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Random seed for reproducible runs (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Maximum solver steps (defaults to one per cell plus slack)
    #[arg(long)]
    pub steps: Option<usize>,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Drives one solve from parsed arguments to a saved PNG
pub struct SolveRunner {
    cli: Cli,
    progress: Option<SolveProgress>,
}

impl SolveRunner {
    /// Create a runner from parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            progress: None,
        }
    }

    /// Solve the grid and export the result
    ///
    /// Runs steps until the session halts or the step limit is reached,
    /// then writes the PNG regardless of outcome so partial solves stay
    /// inspectable.
    ///
    /// # Errors
    ///
    /// Returns an error if session construction fails or the PNG cannot
    /// be written.
    pub fn run(&mut self) -> Result<()> {
        let seed = self.cli.seed.unwrap_or_else(rand::random);
        let mut session = Session::new(catalog::pipes(), self.cli.rows, self.cli.cols, seed)?;
        let mut sink = PngRenderSink::new(self.cli.rows, self.cli.cols, self.cli.cell_size);

        let cell_count = self.cli.rows * self.cli.cols;
        let step_limit = self.cli.steps.unwrap_or(cell_count + STEP_LIMIT_SLACK);

        if self.cli.should_show_progress() {
            self.progress = Some(SolveProgress::new(cell_count as u64));
        }

        let mut steps = 0;
        while steps < step_limit {
            steps += 1;
            let state = session.step_with(&mut sink);
            if let Some(ref progress) = self.progress {
                progress.update(session.collapsed_cells() as u64);
            }
            if state.is_halted() {
                break;
            }
        }

        if let Some(ref progress) = self.progress {
            match session.state() {
                SolverState::HaltedComplete => progress.finish_complete(steps),
                SolverState::HaltedContradiction => progress.finish_contradiction(steps),
                SolverState::Running => progress.finish_limit(steps),
            }
        }

        sink.save(&self.cli.output)
    }
}
