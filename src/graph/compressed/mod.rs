//! Compact, read-only adjacency lists in CSR layout.
//!
//! These are built in one pass (from connection pairs or by snapshotting
//! another backend) and never mutated afterwards.

pub mod csr_adjacency;
pub mod weighted_csr;

pub use csr_adjacency::CsrAdjacency;
pub use weighted_csr::WeightedCsrAdjacency;
