//! Error types for catalog validation and result export
//!
//! Contradictions are deliberately not represented here: an unsolvable grid
//! is the `HaltedContradiction` session state. This type covers failures
//! that prevent a session from starting or a result from being written.

use std::fmt;
use std::path::PathBuf;

/// Main error type for session construction and export operations
#[derive(Debug)]
pub enum SolverError {
    /// Catalog entry declared a socket count other than four
    SocketCount {
        /// Index of the offending catalog entry
        entry: usize,
        /// Image reference of the offending entry
        image: String,
        /// Declared socket count
        count: usize,
    },

    /// Catalog entry declared a rotation outside `0..=3`
    RotationOutOfRange {
        /// Index of the offending catalog entry
        entry: usize,
        /// Image reference of the offending entry
        image: String,
        /// Declared rotation index
        rotation: u8,
    },

    /// Catalog entry declared no rotations at all
    NoRotations {
        /// Index of the offending catalog entry
        entry: usize,
        /// Image reference of the offending entry
        image: String,
    },

    /// Catalog entry carried a zero, negative, or non-finite weight
    NonPositiveWeight {
        /// Index of the offending catalog entry
        entry: usize,
        /// Image reference of the offending entry
        image: String,
        /// Declared weight
        weight: f64,
    },

    /// The catalog held no entries
    EmptyCatalog,

    /// Grid was requested with a zero dimension
    ZeroGridDimension {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Failed to save the rendered result to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SocketCount {
                entry,
                image,
                count,
            } => {
                write!(
                    f,
                    "Catalog entry {entry} ('{image}') declares {count} sockets instead of 4"
                )
            }
            Self::RotationOutOfRange {
                entry,
                image,
                rotation,
            } => {
                write!(
                    f,
                    "Catalog entry {entry} ('{image}') declares rotation {rotation} outside 0..=3"
                )
            }
            Self::NoRotations { entry, image } => {
                write!(f, "Catalog entry {entry} ('{image}') declares no rotations")
            }
            Self::NonPositiveWeight {
                entry,
                image,
                weight,
            } => {
                write!(
                    f,
                    "Catalog entry {entry} ('{image}') has non-positive weight {weight}"
                )
            }
            Self::EmptyCatalog => {
                write!(f, "Catalog holds no entries")
            }
            Self::ZeroGridDimension { rows, cols } => {
                write!(f, "Grid dimensions {rows}x{cols} include a zero extent")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;
