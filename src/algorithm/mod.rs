/// Domain bitsets over tile variant indices
pub mod bitset;
/// Per-direction legality queries and domain refresh
pub mod compatibility;
/// Working set of cells pending re-evaluation
pub mod frontier;
/// Weighted variant selection over prefix sums
pub mod selection;
/// Session lifecycle and the collapse loop
pub mod solver;
