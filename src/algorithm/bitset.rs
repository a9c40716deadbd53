use bitvec::prelude::{BitVec, bitvec};

/// Fixed-size bitset tracking which tile variants remain in a cell's domain
///
/// Variant indices are positions in the session tile set, so every domain
/// across the grid shares one index space. Provides O(1) membership testing
/// and word-wise intersection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantBitset {
    bits: BitVec,
}

impl VariantBitset {
    /// Create a bitset with no variants present
    pub fn empty(variant_count: usize) -> Self {
        Self {
            bits: bitvec![0; variant_count],
        }
    }

    /// Create a bitset containing every variant
    pub fn full(variant_count: usize) -> Self {
        Self {
            bits: bitvec![1; variant_count],
        }
    }

    /// Insert a variant index
    pub fn insert(&mut self, variant: usize) {
        if variant < self.bits.len() {
            self.bits.set(variant, true);
        }
    }

    /// Test variant membership
    pub fn contains(&self, variant: usize) -> bool {
        self.bits.get(variant).as_deref() == Some(&true)
    }

    /// Intersect this bitset with another in place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new bitset containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Remove every variant
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Test if no variants are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count variants in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Variant indices in ascending order
    ///
    /// Ascending order is the stable iteration order that makes weighted
    /// selection reproducible for a fixed seed.
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}
