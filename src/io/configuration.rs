//! Runtime defaults for the command-line solver

/// Default grid rows for the CLI binary
pub const DEFAULT_GRID_ROWS: usize = 20;

/// Default grid columns for the CLI binary
pub const DEFAULT_GRID_COLS: usize = 32;

/// Default square pixel size of one rendered cell
pub const DEFAULT_CELL_SIZE: u32 = 32;

/// Default output path for the exported PNG
pub const DEFAULT_OUTPUT: &str = "wavetile.png";

// One step can end without a collapse (the completing or contradicting
// step), so the limit leaves room past one step per cell
/// Extra steps allowed beyond one per cell
pub const STEP_LIMIT_SLACK: usize = 2;
