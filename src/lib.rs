//! Edge-matching wave function collapse solver for 2-D tile grids
//!
//! Expands a declarative tile catalog into rotated variants, then fills a
//! fixed-size grid by repeatedly collapsing the least-constrained cell to a
//! weighted random choice and propagating the edge constraint to its
//! neighbors. Two facing edges fit when one signature is the exact
//! character-reverse of the other.

#![forbid(unsafe_code)]

/// Core solve loop: domains, compatibility, frontier, and the session state machine
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Grid data model and direction arithmetic
pub mod spatial;
/// Tile catalog, edge sockets, and variant expansion
pub mod tiles;

pub use io::error::{Result, SolverError};
