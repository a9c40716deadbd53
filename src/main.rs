//! CLI entry point for the wave function collapse tiling solver

use clap::Parser;
use wavetile::io::cli::{Cli, SolveRunner};

fn main() -> wavetile::Result<()> {
    let cli = Cli::parse();
    let mut runner = SolveRunner::new(cli);
    runner.run()
}
