//! Mutable adjacency lists.
//!
//! Both lists keep one vector per node and support every structural edit;
//! the weighted list wraps the plain one and mirrors each edit on its weights.

pub mod adjacency_list;
pub mod weighted_list;

pub use adjacency_list::AdjacencyList;
pub use weighted_list::WeightedAdjacencyList;
