//! Error types shared by the tree maps and the scheduler.

use thiserror::Error;

/// Convenience type for results returned by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An enum representing the ways an operation can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The minimum was requested from a map holding no entries.
    #[error("cannot remove the minimum of an empty collection")]
    EmptyCollection,
    /// A process record did not match `Process <A-Z>,<burst time>,<virtual runtime>`.
    #[error("invalid process record: {0:?}")]
    InvalidRecord(String),
    /// A tree variant name other than `AVL` or `RB`.
    #[error("unknown tree kind: {0:?}")]
    UnknownTreeKind(String),
    /// A scheduler configuration that could never drain its queue.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
