//! Declarative tile catalog and construction-time validation
//!
//! A catalog lists base tiles by image reference with their four edge
//! signatures, the rotations to expand, and a selection weight. Validation
//! runs before any grid is allocated so a malformed entry can never surface
//! mid-solve.

use crate::io::error::{Result, SolverError};
use crate::tiles::socket::Socket;

/// Number of edge signatures per entry (north, east, south, west)
pub const SOCKETS_PER_TILE: usize = 4;

/// Highest valid quarter-turn rotation index
pub const MAX_ROTATION: u8 = 3;

/// One declarative catalog entry before variant expansion
#[derive(Clone, Debug)]
pub struct CatalogEntry {
    /// Reference to the tile artwork, passed through to render collaborators
    pub image: String,
    /// Edge signatures in north, east, south, west order
    pub sockets: Vec<Socket>,
    /// Quarter-turn rotations to expand, each in `0..=3`
    pub rotations: Vec<u8>,
    /// Positive selection weight, shared by every expanded rotation
    pub weight: f64,
}

impl CatalogEntry {
    /// Build an entry from plain signature strings
    pub fn new(
        image: impl Into<String>,
        sockets: [&str; SOCKETS_PER_TILE],
        rotations: &[u8],
        weight: f64,
    ) -> Self {
        Self {
            image: image.into(),
            sockets: sockets.iter().map(|signature| Socket::from(*signature)).collect(),
            rotations: rotations.to_vec(),
            weight,
        }
    }
}

/// Validate every entry of a catalog
///
/// # Errors
///
/// Returns an error if the catalog is empty, an entry declares a socket
/// count other than four, lists no rotations, lists a rotation outside
/// `0..=3`, or carries a non-positive or non-finite weight.
pub fn validate(catalog: &[CatalogEntry]) -> Result<()> {
    if catalog.is_empty() {
        return Err(SolverError::EmptyCatalog);
    }

    for (index, entry) in catalog.iter().enumerate() {
        if entry.sockets.len() != SOCKETS_PER_TILE {
            return Err(SolverError::SocketCount {
                entry: index,
                image: entry.image.clone(),
                count: entry.sockets.len(),
            });
        }

        if entry.rotations.is_empty() {
            return Err(SolverError::NoRotations {
                entry: index,
                image: entry.image.clone(),
            });
        }

        if let Some(&rotation) = entry.rotations.iter().find(|&&r| r > MAX_ROTATION) {
            return Err(SolverError::RotationOutOfRange {
                entry: index,
                image: entry.image.clone(),
                rotation,
            });
        }

        if !(entry.weight.is_finite() && entry.weight > 0.0) {
            return Err(SolverError::NonPositiveWeight {
                entry: index,
                image: entry.image.clone(),
                weight: entry.weight,
            });
        }
    }

    Ok(())
}

/// Built-in pipe tile catalog
///
/// The classic six-piece pipe set: a heavily weighted blank, the tee,
/// straight, corner, and four-way pieces, plus a rare one-way end cap.
pub fn pipes() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("blank.png", ["AAA", "AAA", "AAA", "AAA"], &[0], 2.0),
        CatalogEntry::new("tcross.png", ["ABA", "ABA", "AAA", "ABA"], &[0, 1, 2, 3], 1.0),
        CatalogEntry::new("line.png", ["ABA", "AAA", "ABA", "AAA"], &[0, 1], 1.0),
        CatalogEntry::new("corner.png", ["AAA", "ABA", "ABA", "AAA"], &[0, 1, 2, 3], 1.0),
        CatalogEntry::new("cross.png", ["ABA", "ABA", "ABA", "ABA"], &[0], 1.0),
        CatalogEntry::new("end.png", ["AAA", "AAA", "ABA", "AAA"], &[0, 1, 2, 3], 0.1),
    ]
}

#[cfg(test)]
mod tests {
    use super::{CatalogEntry, pipes, validate};
    use crate::io::error::SolverError;
    use crate::tiles::socket::Socket;

    #[test]
    fn builtin_pipes_catalog_is_valid() {
        assert!(validate(&pipes()).is_ok());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(matches!(validate(&[]), Err(SolverError::EmptyCatalog)));
    }

    #[test]
    fn short_socket_list_is_rejected() {
        let entry = CatalogEntry {
            image: "bad.png".to_owned(),
            sockets: vec![Socket::new("AAA"); 3],
            rotations: vec![0],
            weight: 1.0,
        };
        assert!(matches!(
            validate(&[entry]),
            Err(SolverError::SocketCount { count: 3, .. })
        ));
    }

    #[test]
    fn rotation_out_of_range_is_rejected() {
        let entry = CatalogEntry::new("bad.png", ["AAA"; 4], &[0, 4], 1.0);
        assert!(matches!(
            validate(&[entry]),
            Err(SolverError::RotationOutOfRange { rotation: 4, .. })
        ));
    }

    #[test]
    fn missing_rotations_are_rejected() {
        let entry = CatalogEntry::new("bad.png", ["AAA"; 4], &[], 1.0);
        assert!(matches!(
            validate(&[entry]),
            Err(SolverError::NoRotations { .. })
        ));
    }

    #[test]
    fn non_positive_weight_is_rejected() {
        let zero = CatalogEntry::new("bad.png", ["AAA"; 4], &[0], 0.0);
        assert!(matches!(
            validate(&[zero]),
            Err(SolverError::NonPositiveWeight { .. })
        ));

        let nan = CatalogEntry::new("bad.png", ["AAA"; 4], &[0], f64::NAN);
        assert!(matches!(
            validate(&[nan]),
            Err(SolverError::NonPositiveWeight { .. })
        ));
    }
}
