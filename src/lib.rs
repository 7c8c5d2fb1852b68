//! # `adjacency` - Adjacency Lists for Graph Code
//!
//! Integer-indexed adjacency lists in two layouts, each with a weighted twin,
//! behind one small trait so that any of them can be rebuilt from any other.
//!
//! ## Backends
//!
//! | Type | Layout | Mutable | Weights |
//! |------|--------|---------|---------|
//! | [`AdjacencyList`] | one `Vec<usize>` per node | yes | no |
//! | [`WeightedAdjacencyList`] | list + parallel `Vec<Vec<W>>` | yes | yes |
//! | [`CsrAdjacency`] | `offsets` + `targets` (CSR) | no | no |
//! | [`WeightedCsrAdjacency`] | CSR + flat weight array | no | yes |
//!
//! The usual workflow is to build or edit a mutable list, then freeze it into
//! the compact layout for traversal-heavy work.
//!
//! ## Guarantees
//!
//! - **No duplicates**: a node never holds the same adjacent twice. Every
//!   operation that would break this fails with
//!   [`AdjacencyError::DuplicateAdjacent`].
//! - **Check before mutate**: a call that returns `Err` leaves the list
//!   exactly as it was, weights included.
//! - **Raw indices**: node edits move whole adjacency vectors and never
//!   rewrite the adjacent values stored in them.
//! - **Aligned weights**: `weight(node, slot)` always belongs to
//!   `adjacent(node, slot)`.
//!
//! ## Cargo features
//!
//! - `tracing`: debug events on construction and conversion, trace events on
//!   rejected operations.
//! - `parallel`: `par_neighborhoods()` on the compact backends via `rayon`.
//! - `proptest`: the [`strategy`] module of input generators.
//!
//! ## Example
//!
//! ```rust
//! use adjacency::{Adjacency, AdjacencyList, CsrAdjacency, ErrorKind};
//!
//! let mut list = AdjacencyList::from_connections(&[(0, 1), (0, 2), (1, 2)])?;
//! list.add_adjacent(2, 0)?;
//! assert_eq!(list.add_adjacent(2, 0).unwrap_err().kind(), ErrorKind::DuplicateViolation);
//!
//! let csr = CsrAdjacency::from(&list);
//! assert_eq!(csr.neighbors(0)?, &[1, 2]);
//! assert_eq!(csr.connection_count(), 4);
//! # Ok::<(), adjacency::AdjacencyError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
mod macros;

pub mod error;
pub mod graph;
#[cfg(any(test, feature = "proptest"))]
pub mod strategy;

pub use error::{AdjacencyError, ErrorKind, Result};
pub use graph::{
    Adjacency, AdjacencyList, AnyAdjacency, BackendKind, CsrAdjacency, Weight, WeightedAdjacency,
    WeightedAdjacencyList, WeightedCsrAdjacency,
};

// Compile-time layout checks.
const _: () = {
    use core::mem;

    // The compact backend is exactly two vectors.
    assert!(mem::size_of::<CsrAdjacency>() == 2 * mem::size_of::<Vec<usize>>());
    // The weighted wrappers add one vector on top of what they wrap.
    assert!(
        mem::size_of::<WeightedCsrAdjacency<f64>>()
            == mem::size_of::<CsrAdjacency>() + mem::size_of::<Vec<f64>>()
    );
};
