//! Error type shared by every adjacency backend.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = AdjacencyError> = core::result::Result<T, E>;

/// The coarse category of an [`AdjacencyError`].
///
/// Callers that only care about *why* an operation was rejected can match on
/// this instead of on the individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A node index or an adjacent slot was outside its valid range.
    OutOfBound,
    /// The operation would store the same destination twice for one node.
    DuplicateViolation,
    /// A destination looked up by value is not adjacent to the node.
    NotFound,
    /// Connection and weight inputs have different lengths.
    LengthMismatch,
}

/// Errors returned by adjacency operations.
///
/// Every fallible operation validates its arguments before touching any
/// storage, so an `Err` always leaves the receiver exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdjacencyError {
    /// `node` is not in `0..node_count`.
    #[error("node {node} is out of bounds for {node_count} nodes")]
    NodeOutOfBound {
        /// The rejected node index.
        node: usize,
        /// Number of nodes at the time of the call.
        node_count: usize,
    },

    /// `slot` is not a valid adjacent position of `node`.
    #[error("slot {slot} is out of bounds for node {node} with {len} adjacents")]
    SlotOutOfBound {
        /// The node whose adjacents were indexed.
        node: usize,
        /// The rejected slot.
        slot: usize,
        /// Number of adjacents of `node` at the time of the call.
        len: usize,
    },

    /// `adjacent` is already present in the adjacents of `node`.
    #[error("{adjacent} is already adjacent to node {node}")]
    DuplicateAdjacent {
        /// The node being modified.
        node: usize,
        /// The destination that would have been duplicated.
        adjacent: usize,
    },

    /// `adjacent` does not appear in the adjacents of `node`.
    #[error("{adjacent} is not adjacent to node {node}")]
    AdjacentNotFound {
        /// The node that was searched.
        node: usize,
        /// The missing destination.
        adjacent: usize,
    },

    /// Connection and weight lists passed to a constructor differ in length.
    #[error("got {connections} connections but {weights} weights")]
    LengthMismatch {
        /// Number of connections supplied.
        connections: usize,
        /// Number of weights supplied.
        weights: usize,
    },
}

impl AdjacencyError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NodeOutOfBound { .. } | Self::SlotOutOfBound { .. } => ErrorKind::OutOfBound,
            Self::DuplicateAdjacent { .. } => ErrorKind::DuplicateViolation,
            Self::AdjacentNotFound { .. } => ErrorKind::NotFound,
            Self::LengthMismatch { .. } => ErrorKind::LengthMismatch,
        }
    }
}
