//! Cardinal directions shared by tile edges and grid neighbor lookups

/// One of the four neighbor directions
///
/// The discriminant order (north, east, south, west) matches the socket
/// order of catalog entries, so the same index arithmetic serves edge
/// lookup and rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the previous row
    North,
    /// Toward the next column
    East,
    /// Toward the next row
    South,
    /// Toward the previous column
    West,
}

impl Direction {
    /// All directions in socket order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Cyclic index in socket order
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Direction for a cyclic index, wrapping modulo four
    pub const fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::North,
            1 => Self::East,
            2 => Self::South,
            _ => Self::West,
        }
    }

    /// Direction pointing back toward this one
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Row and column deltas of the neighbor in this direction
    pub const fn offset(self) -> [i32; 2] {
        match self {
            Self::North => [-1, 0],
            Self::East => [0, 1],
            Self::South => [1, 0],
            Self::West => [0, -1],
        }
    }
}
