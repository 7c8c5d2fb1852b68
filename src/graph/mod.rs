//! Adjacency backends and the contracts they share.
//!
//! Backends are organized into categories:
//! - `basic`: growable lists that support structural editing
//! - `compressed`: read-only CSR snapshots
//!
//! [`AnyAdjacency`] holds any one of the four and converts between them.

pub mod any_adjacency;
pub mod basic;
pub mod compressed;
pub mod traits;
pub(crate) mod access;

pub use any_adjacency::{AnyAdjacency, BackendKind};
pub use basic::{AdjacencyList, WeightedAdjacencyList};
pub use compressed::{CsrAdjacency, WeightedCsrAdjacency};
pub use traits::{Adjacency, Weight, WeightedAdjacency};
