//! Edge signatures and the mirror compatibility rule
//!
//! A socket names the connector shape along one side of a tile. Two facing
//! edges fit together when one signature reads as the exact character
//! reverse of the other, so palindromic signatures are self-compatible
//! while directional connectors require a mirrored partner.

use std::fmt;

/// Signature presented by the virtual boundary surrounding the grid
pub const BOUNDARY_SIGNATURE: &str = "AAA";

/// Connector signature along one side of a tile
///
/// Signatures are short fixed-length symbol strings read clockwise along
/// their edge. Matching uses the mirror rule only; the symbols themselves
/// carry no further meaning.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Socket(String);

impl Socket {
    /// Create a socket from a signature string
    pub fn new(signature: impl Into<String>) -> Self {
        Self(signature.into())
    }

    /// The signature out-of-bounds neighbors present
    pub fn boundary() -> Self {
        Self(BOUNDARY_SIGNATURE.to_owned())
    }

    /// Signature text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Character-reverse of this signature
    ///
    /// The facing edge is read in the opposite winding direction, so the
    /// compatible partner of a signature is its reverse.
    pub fn reversed(&self) -> Self {
        Self(self.0.chars().rev().collect())
    }

    /// Mirror-rule test: `self` fits against `other` exactly when `other`
    /// is the character-reverse of `self`
    pub fn mirrors(&self, other: &Self) -> bool {
        *self == other.reversed()
    }
}

impl fmt::Display for Socket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Socket {
    fn from(signature: &str) -> Self {
        Self::new(signature)
    }
}
