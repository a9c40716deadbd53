//! Tile variant expansion and edge lookup tables
//!
//! Expands the declarative catalog into one concrete variant per declared
//! rotation and indexes the result by direction and signature, so the
//! compatibility engine answers legality queries with a single lookup.

use std::collections::HashMap;

use crate::algorithm::bitset::VariantBitset;
use crate::io::error::Result;
use crate::spatial::direction::Direction;
use crate::tiles::catalog::{self, CatalogEntry, SOCKETS_PER_TILE};
use crate::tiles::socket::Socket;

/// One concrete, rotated tile with resolved edges and weight
///
/// Immutable once expanded; the solver refers to variants by their index
/// in the owning [`TileSet`].
#[derive(Clone, Debug)]
pub struct TileVariant {
    /// Index of the catalog entry this variant came from
    pub catalog_index: usize,
    /// Artwork reference copied from the catalog entry
    pub image: String,
    /// Quarter-turn rotation applied to the base sockets
    pub rotation: u8,
    /// Selection weight copied unchanged from the entry
    pub weight: f64,
    edges: [Socket; SOCKETS_PER_TILE],
}

impl TileVariant {
    /// Edge signature facing a direction
    pub const fn edge(&self, direction: Direction) -> &Socket {
        let [north, east, south, west] = &self.edges;
        match direction {
            Direction::North => north,
            Direction::East => east,
            Direction::South => south,
            Direction::West => west,
        }
    }
}

/// Cyclic rotation of the base sockets by `rotation` quarter turns
///
/// The rotated edge on direction `d` is the base edge on `(d - r) mod 4`,
/// so a tile turned clockwise presents its former north edge to the east.
fn rotated_edges(base: &[Socket; SOCKETS_PER_TILE], rotation: u8) -> [Socket; SOCKETS_PER_TILE] {
    let shift = rotation as usize % SOCKETS_PER_TILE;
    let source = |direction: usize| {
        let [north, east, south, west] = base;
        match (direction + SOCKETS_PER_TILE - shift) % SOCKETS_PER_TILE {
            0 => north.clone(),
            1 => east.clone(),
            2 => south.clone(),
            _ => west.clone(),
        }
    };
    [source(0), source(1), source(2), source(3)]
}

fn build_edge_index(
    variants: &[TileVariant],
) -> [HashMap<Socket, VariantBitset>; SOCKETS_PER_TILE] {
    let mut index: [HashMap<Socket, VariantBitset>; SOCKETS_PER_TILE] = Default::default();
    let count = variants.len();

    for (map, direction) in index.iter_mut().zip(Direction::ALL) {
        for (variant_index, variant) in variants.iter().enumerate() {
            map.entry(variant.edge(direction).clone())
                .or_insert_with(|| VariantBitset::empty(count))
                .insert(variant_index);
        }
    }

    index
}

/// Expanded, read-only tile set for one session
///
/// Built once from the catalog at session start (and again on restart);
/// the solver only reads from it afterwards.
#[derive(Clone, Debug)]
pub struct TileSet {
    variants: Vec<TileVariant>,
    edge_index: [HashMap<Socket, VariantBitset>; SOCKETS_PER_TILE],
    boundary: Socket,
}

impl TileSet {
    /// Expand a catalog into concrete variants
    ///
    /// Produces one variant per declared rotation per entry, in catalog
    /// order, with the entry's sockets cyclically rotated and its weight
    /// copied unchanged (not divided across rotations).
    ///
    /// # Errors
    ///
    /// Returns an error if catalog validation fails: wrong socket count,
    /// rotation out of range, missing rotations, non-positive weight, or
    /// an empty catalog.
    pub fn from_catalog(entries: &[CatalogEntry]) -> Result<Self> {
        catalog::validate(entries)?;

        let mut variants = Vec::new();
        for (catalog_index, entry) in entries.iter().enumerate() {
            // Validation pinned the socket count to four
            let Ok(base) = <[Socket; SOCKETS_PER_TILE]>::try_from(entry.sockets.clone()) else {
                continue;
            };
            for &rotation in &entry.rotations {
                variants.push(TileVariant {
                    catalog_index,
                    image: entry.image.clone(),
                    rotation,
                    weight: entry.weight,
                    edges: rotated_edges(&base, rotation),
                });
            }
        }

        let edge_index = build_edge_index(&variants);

        Ok(Self {
            variants,
            edge_index,
            boundary: Socket::boundary(),
        })
    }

    /// Number of variants after expansion
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether the set holds no variants
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Variant by index
    pub fn variant(&self, index: usize) -> Option<&TileVariant> {
        self.variants.get(index)
    }

    /// All variants in expansion order
    pub fn variants(&self) -> &[TileVariant] {
        &self.variants
    }

    /// Bitset containing every variant
    pub fn all_variants(&self) -> VariantBitset {
        VariantBitset::full(self.variants.len())
    }

    /// Variants showing `signature` on their `direction` edge
    pub fn matching_edge(&self, direction: Direction, signature: &Socket) -> VariantBitset {
        self.index_for(direction)
            .get(signature)
            .cloned()
            .unwrap_or_else(|| VariantBitset::empty(self.variants.len()))
    }

    /// Variants whose `direction` edge fits the virtual boundary
    pub fn boundary_compatible(&self, direction: Direction) -> VariantBitset {
        self.matching_edge(direction, &self.boundary)
    }

    /// The signature out-of-bounds neighbors present
    pub const fn boundary(&self) -> &Socket {
        &self.boundary
    }

    const fn index_for(&self, direction: Direction) -> &HashMap<Socket, VariantBitset> {
        let [north, east, south, west] = &self.edge_index;
        match direction {
            Direction::North => north,
            Direction::East => east,
            Direction::South => south,
            Direction::West => west,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TileSet;
    use crate::spatial::direction::Direction;
    use crate::tiles::catalog::{self, CatalogEntry};
    use crate::tiles::socket::Socket;

    #[test]
    fn pipes_catalog_expands_to_declared_rotations() {
        let tiles = TileSet::from_catalog(&catalog::pipes()).unwrap();
        // 1 + 4 + 2 + 4 + 1 + 4 declared rotations
        assert_eq!(tiles.len(), 16);
    }

    #[test]
    fn rotation_shifts_edges_cyclically() {
        let entry = CatalogEntry::new("probe.png", ["N", "E", "S", "W"], &[0, 1, 2, 3], 1.0);
        let tiles = TileSet::from_catalog(std::slice::from_ref(&entry)).unwrap();

        for variant in tiles.variants() {
            let rotation = variant.rotation as usize;
            for direction in Direction::ALL {
                let source = (direction.index() + 4 - rotation) % 4;
                let expected = entry.sockets.get(source).unwrap();
                assert_eq!(variant.edge(direction), expected);
            }
        }
    }

    #[test]
    fn weight_is_copied_not_divided() {
        let entry = CatalogEntry::new("probe.png", ["A", "B", "C", "D"], &[0, 1, 2, 3], 2.5);
        let tiles = TileSet::from_catalog(&[entry]).unwrap();
        assert!(tiles.variants().iter().all(|variant| variant.weight == 2.5));
    }

    #[test]
    fn edge_index_finds_matching_variants() {
        let tiles = TileSet::from_catalog(&catalog::pipes()).unwrap();
        let matches = tiles.matching_edge(Direction::North, &Socket::new("ABA"));

        for index in matches.to_vec() {
            let variant = tiles.variant(index).unwrap();
            assert_eq!(variant.edge(Direction::North).as_str(), "ABA");
        }
        assert!(!matches.is_empty());
    }

    #[test]
    fn unknown_signature_matches_nothing() {
        let tiles = TileSet::from_catalog(&catalog::pipes()).unwrap();
        let matches = tiles.matching_edge(Direction::South, &Socket::new("ZZZ"));
        assert!(matches.is_empty());
    }

    #[test]
    fn boundary_compatible_requires_boundary_edge() {
        let tiles = TileSet::from_catalog(&catalog::pipes()).unwrap();
        for direction in Direction::ALL {
            for index in tiles.boundary_compatible(direction).to_vec() {
                let variant = tiles.variant(index).unwrap();
                assert_eq!(variant.edge(direction), tiles.boundary());
            }
        }
    }
}
