//! Tile catalog, edge sockets, and variant expansion
//!
//! This module covers everything tiles: the declarative catalog with its
//! construction-time validation, the edge signature type with the mirror
//! rule, and the expanded per-session tile set.

/// Declarative catalog and validation
pub mod catalog;
/// Expanded tile set and variant lookup tables
pub mod set;
/// Edge signatures and the mirror rule
pub mod socket;

pub use set::{TileSet, TileVariant};
