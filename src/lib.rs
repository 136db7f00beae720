//! Fixed-capacity hash tables with explicit collision resolution.
//!
//! Two standalone string-keyed mapping structures, each built over a
//! backing array whose size is fixed at construction:
//!
//! - [`ChainedTable`]: one bucket per home index, collisions linked off
//!   the bucket as an owned forward chain.
//! - [`ProbingTable`]: a flat slot array, collisions resolved by linear
//!   probing with wraparound and tombstoned deletion.
//!
//! **Neither table resizes.** This is a documented limitation, not an
//! oversight: a `ChainedTable` absorbs sustained insertion into longer
//! chains (and slower lookups), while a `ProbingTable` refuses new keys
//! with [`TableError::TableFull`] once every slot holds a live entry.
//!
//! Both tables default to the deterministic [FNV-1a] hasher in
//! [`collections::fnv`], so a key's home index is reproducible across
//! runs and table instances.
//!
//! # Examples
//!
//! ```
//! use hashtab::prelude::*;
//!
//! let mut chained = ChainedTable::new(5);
//! let mut probing = ProbingTable::new(5);
//!
//! for (key, value) in [("apple", 10), ("banana", 20), ("grape", 30)] {
//!     chained.put(key, value).unwrap();
//!     probing.put(key, value).unwrap();
//! }
//!
//! assert_eq!(chained.get("banana"), Ok(&20));
//! assert_eq!(probing.get("banana"), Ok(&20));
//!
//! assert!(probing.remove("banana"));
//! assert_eq!(probing.get("banana"), Err(TableError::NotFound("banana".into())));
//! ```
//!
//! [`ChainedTable`]: collections::chained_table::ChainedTable
//! [`ProbingTable`]: collections::probing_table::ProbingTable
//! [`TableError::TableFull`]: error::TableError::TableFull
//! [FNV-1a]: https://en.wikipedia.org/wiki/Fowler%E2%80%93Noll%E2%80%93Vo_hash_function

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod collections;
pub mod error;

/// Fixed-Capacity Hash Table Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use super::collections::chained_table::ChainedTable;
    #[doc(no_inline)]
    pub use super::collections::fnv::{FnvBuildHasher, FnvHasher};
    #[doc(no_inline)]
    pub use super::collections::probing_table::ProbingTable;
    #[doc(no_inline)]
    pub use super::error::TableError;
}
