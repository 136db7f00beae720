//! Deterministic [FNV-1a] string hashing.
//!
//! Both table types in this crate resolve a key to its home index by
//! reducing a 64-bit hash modulo the table capacity. A randomized
//! per-process hasher (such as [`RandomState`]) would make slot placement
//! unreproducible between runs, so the tables default to FNV-1a, which is
//! fixed by its constants.
//!
//! [FNV-1a]: https://en.wikipedia.org/wiki/Fowler%E2%80%93Noll%E2%80%93Vo_hash_function
//! [`RandomState`]: std::hash::RandomState

use core::hash::{BuildHasher, Hasher};

/// Fowler–Noll–Vo (FNV-1a) non-cryptographic hash function.
///
/// # Examples
///
/// ```
/// use core::hash::Hasher;
///
/// use hashtab::prelude::*;
///
/// let mut hasher = FnvHasher::new();
/// hasher.write(b"a");
///
/// // Known FNV-1a 64-bit test vector.
/// assert_eq!(hasher.finish(), 0xAF63_DC4C_8601_EC8C);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct FnvHasher {
    hash: u64,
}

impl FnvHasher {
    const PRIME: u64 = 0x100000001B3;
    const OFFSET_BASIS: u64 = 0xCBF29CE484222325;

    /// Creates a new [`FnvHasher`], initialized with the FNV offset basis.
    pub fn new() -> Self {
        Self {
            hash: Self::OFFSET_BASIS,
        }
    }
}

impl Default for FnvHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.hash ^= *byte as u64;
            self.hash = self.hash.wrapping_mul(Self::PRIME);
        }
    }
}

/// Builder for [`FnvHasher`].
///
/// This is the default `BuildHasher` for both [`ChainedTable`] and
/// [`ProbingTable`]. Unlike [`RandomState`], it carries no per-instance
/// seed, so two tables of the same capacity place every key at the same
/// home index.
///
/// [`ChainedTable`]: crate::collections::chained_table::ChainedTable
/// [`ProbingTable`]: crate::collections::probing_table::ProbingTable
/// [`RandomState`]: std::hash::RandomState
#[derive(Debug, Copy, Clone, Default)]
pub struct FnvBuildHasher {}

impl BuildHasher for FnvBuildHasher {
    type Hasher = FnvHasher;

    fn build_hasher(&self) -> Self::Hasher {
        Self::Hasher::new()
    }
}
