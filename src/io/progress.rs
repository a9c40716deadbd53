//! Progress display for a single solve run

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SOLVE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Cells: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar tracking collapsed cells against the grid size
pub struct SolveProgress {
    bar: ProgressBar,
}

impl SolveProgress {
    /// Create a bar sized to the number of cells to collapse
    pub fn new(total_cells: u64) -> Self {
        let bar = ProgressBar::new(total_cells);
        bar.set_style(SOLVE_STYLE.clone());
        Self { bar }
    }

    /// Report the number of cells collapsed so far
    pub fn update(&self, collapsed: u64) {
        self.bar.set_position(collapsed);
    }

    /// Close the bar after a completed solve
    pub fn finish_complete(&self, steps: usize) {
        self.bar.finish_with_message(format!("solved in {steps} steps"));
    }

    /// Close the bar after a contradiction
    pub fn finish_contradiction(&self, steps: usize) {
        self.bar
            .abandon_with_message(format!("contradiction at step {steps}"));
    }

    /// Close the bar after hitting the step limit
    pub fn finish_limit(&self, steps: usize) {
        self.bar
            .abandon_with_message(format!("step limit reached after {steps} steps"));
    }
}
