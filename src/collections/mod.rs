//! Collection Types.

pub mod chained_table;
pub mod fnv;
pub mod probing_table;

/// Fixed-Capacity Hash Table Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use super::chained_table::ChainedTable;
    #[doc(no_inline)]
    pub use super::fnv::{FnvBuildHasher, FnvHasher};
    #[doc(no_inline)]
    pub use super::probing_table::ProbingTable;
}
