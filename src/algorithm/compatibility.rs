//! Per-direction legality queries and domain refresh
//!
//! Realizes the mirror matching law against the three neighbor situations:
//! the virtual boundary, an uncollapsed neighbor (no constraint yet), and a
//! collapsed neighbor whose fixed edge dictates the compatible set.

use crate::algorithm::bitset::VariantBitset;
use crate::spatial::direction::Direction;
use crate::spatial::grid::Grid;
use crate::tiles::set::TileSet;

/// Variants of the cell at `pos` that remain legal toward `direction`
///
/// - Off-grid neighbor: variants whose edge equals the boundary signature.
/// - Uncollapsed neighbor: the entire tile set.
/// - Collapsed neighbor: variants whose edge is the character-reverse of
///   the fixed edge facing back from the neighbor.
pub fn compatible_variants(
    grid: &Grid,
    tiles: &TileSet,
    pos: [usize; 2],
    direction: Direction,
) -> VariantBitset {
    let Some(neighbor_pos) = grid.neighbor(pos, direction) else {
        return tiles.boundary_compatible(direction);
    };

    let fixed = grid
        .get(neighbor_pos)
        .filter(|cell| cell.collapsed)
        .and_then(|cell| cell.chosen)
        .and_then(|variant| tiles.variant(variant));

    match fixed {
        Some(variant) => {
            let facing = variant.edge(direction.opposite());
            tiles.matching_edge(direction, &facing.reversed())
        }
        None => tiles.all_variants(),
    }
}

/// Recomputed domain for the cell at `pos`
///
/// Intersects the four per-direction compatible sets with the current
/// domain, so a refresh can only shrink the domain. Collapsed cells return
/// their (empty) domain untouched.
pub fn refreshed_domain(grid: &Grid, tiles: &TileSet, pos: [usize; 2]) -> VariantBitset {
    let Some(cell) = grid.get(pos) else {
        return VariantBitset::empty(tiles.len());
    };
    if cell.collapsed {
        return cell.domain.clone();
    }

    let mut domain = cell.domain.clone();
    for direction in Direction::ALL {
        domain.intersect_with(&compatible_variants(grid, tiles, pos, direction));
    }
    domain
}
