//! Errors shared by the table implementations.

use thiserror::Error;

/// The error type for table operations.
///
/// Every error is local and non-fatal: the operation that produced it made
/// no change to the table, and the caller decides whether to treat it as
/// fatal. There are no retries and no partial failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The provided key was empty.
    ///
    /// Applied uniformly by both table types, in `put` and `get`.
    #[error("key must be non-empty")]
    InvalidKey,

    /// No entry exists for the provided key. Carries the key that missed.
    #[error("key '{0}' not found")]
    NotFound(String),

    /// The probing table has no room for a new entry.
    ///
    /// Neither table resizes; once a [`ProbingTable`] holds `capacity`
    /// live entries, every `put` of a new key fails with this error until
    /// something is removed.
    ///
    /// [`ProbingTable`]: crate::collections::probing_table::ProbingTable
    #[error("table is full (capacity: {capacity}, size: {size})")]
    TableFull {
        /// Total number of slots in the table.
        capacity: usize,
        /// Number of live entries at the time of the failed insert.
        size: usize,
    },
}
