//! The adjacency contracts every backend implements.
//!
//! [`Adjacency`] is the only thing one backend needs to know about another to
//! rebuild itself from it: the snapshot and conversion constructors iterate
//! `0..node_count()` and, per node, `0..adjacent_count(node)` through these
//! accessors and nothing else.

use core::fmt::Debug;

use num_traits::Float;

use crate::error::Result;

/// A mapping from the contiguous node range `0..node_count()` to ordered sets
/// of adjacent `usize` values.
///
/// Adjacent values are raw integers. They usually name other nodes, but the
/// contract never requires that, and structural edits never relabel them.
///
/// # Contract for implementers
///
/// - `adjacent(node, slot)` must return the same value for repeated calls
///   while the instance is not mutated.
/// - A node never reports the same adjacent twice.
/// - `connection_count()` equals the sum of `adjacent_count` over all nodes.
/// - `adjacent_count(node)` and `adjacent(node, slot)` succeed for every
///   `node < node_count()` and `slot < adjacent_count(node)`. The default
///   iterator helpers stop at the first failure, so a violating implementor
///   yields truncated output; debug builds assert instead.
///
/// The trait is object safe; the iterator helpers are only available on sized
/// implementors.
pub trait Adjacency {
    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Total number of connections over all nodes.
    fn connection_count(&self) -> usize;

    /// Number of adjacents of `node`.
    ///
    /// # Errors
    /// [`NodeOutOfBound`](crate::AdjacencyError::NodeOutOfBound) if
    /// `node >= node_count()`.
    fn adjacent_count(&self, node: usize) -> Result<usize>;

    /// The adjacent stored at `slot` in the adjacents of `node`.
    ///
    /// # Errors
    /// [`NodeOutOfBound`](crate::AdjacencyError::NodeOutOfBound) for an
    /// invalid node, [`SlotOutOfBound`](crate::AdjacencyError::SlotOutOfBound)
    /// if `slot >= adjacent_count(node)`.
    fn adjacent(&self, node: usize, slot: usize) -> Result<usize>;

    /// Returns `true` if there are no nodes.
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// Slot of `adjacent` among the adjacents of `node`, if present.
    fn position_of(&self, node: usize, adjacent: usize) -> Result<Option<usize>> {
        let len = self.adjacent_count(node)?;
        for slot in 0..len {
            if self.adjacent(node, slot)? == adjacent {
                return Ok(Some(slot));
            }
        }
        Ok(None)
    }

    /// Returns `true` if `adjacent` is one of the adjacents of `node`.
    fn contains_adjacent(&self, node: usize, adjacent: usize) -> Result<bool> {
        Ok(self.position_of(node, adjacent)?.is_some())
    }

    /// Iterates the adjacents of `node` in slot order.
    fn adjacents(&self, node: usize) -> Result<impl Iterator<Item = usize> + '_>
    where
        Self: Sized,
    {
        let len = self.adjacent_count(node)?;
        Ok((0..len).map_while(move |slot| checked_adjacent(self, node, slot)))
    }

    /// Iterates every connection as `(source, adjacent)`, node by node.
    fn connections(&self) -> impl Iterator<Item = (usize, usize)> + '_
    where
        Self: Sized,
    {
        (0..self.node_count()).flat_map(move |node| {
            let len = self.adjacent_count(node);
            debug_assert!(len.is_ok(), "adjacent_count({node}) failed inside 0..node_count()");
            (0..len.unwrap_or(0))
                .map_while(move |slot| checked_adjacent(self, node, slot).map(|adj| (node, adj)))
        })
    }
}

/// `adjacent(node, slot)` for a slot the implementor itself reported as valid.
fn checked_adjacent<A: Adjacency + ?Sized>(adjacency: &A, node: usize, slot: usize) -> Option<usize> {
    let adjacent = adjacency.adjacent(node, slot);
    debug_assert!(
        adjacent.is_ok(),
        "adjacent({node}, {slot}) failed inside 0..adjacent_count({node})"
    );
    adjacent.ok()
}

/// Scalar weight attached to a connection.
///
/// Any float type qualifies; `f64` is the default used by the weighted
/// backends.
pub trait Weight: Float + Debug + Send + Sync + 'static {}

impl<T: Float + Debug + Send + Sync + 'static> Weight for T {}

/// An [`Adjacency`] whose connections each carry a weight.
///
/// Weights are index-aligned with adjacents: `weight(node, slot)` belongs to
/// the connection returned by `adjacent(node, slot)`.
pub trait WeightedAdjacency: Adjacency {
    /// The weight type.
    type Weight: Weight;

    /// Weight of the connection at `slot` of `node`.
    ///
    /// # Errors
    /// Same bound failures as [`Adjacency::adjacent`].
    fn weight(&self, node: usize, slot: usize) -> Result<Self::Weight>;

    /// The adjacent and its weight in one call.
    fn weighted_adjacent(&self, node: usize, slot: usize) -> Result<(usize, Self::Weight)> {
        Ok((self.adjacent(node, slot)?, self.weight(node, slot)?))
    }

    /// Iterates every connection as `(source, adjacent, weight)`.
    fn weighted_connections(&self) -> impl Iterator<Item = (usize, usize, Self::Weight)> + '_
    where
        Self: Sized,
    {
        (0..self.node_count()).flat_map(move |node| {
            let len = self.adjacent_count(node).unwrap_or(0);
            (0..len).map_while(move |slot| {
                self.weighted_adjacent(node, slot)
                    .ok()
                    .map(|(adj, w)| (node, adj, w))
            })
        })
    }
}

impl<A: Adjacency + ?Sized> Adjacency for &A {
    fn node_count(&self) -> usize {
        (**self).node_count()
    }

    fn connection_count(&self) -> usize {
        (**self).connection_count()
    }

    fn adjacent_count(&self, node: usize) -> Result<usize> {
        (**self).adjacent_count(node)
    }

    fn adjacent(&self, node: usize, slot: usize) -> Result<usize> {
        (**self).adjacent(node, slot)
    }
}

impl<A: WeightedAdjacency + ?Sized> WeightedAdjacency for &A {
    type Weight = A::Weight;

    fn weight(&self, node: usize, slot: usize) -> Result<Self::Weight> {
        (**self).weight(node, slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdjacencyError;

    /// Reports two adjacents per node but can only produce the first.
    struct ShortRows;

    impl Adjacency for ShortRows {
        fn node_count(&self) -> usize {
            2
        }

        fn connection_count(&self) -> usize {
            4
        }

        fn adjacent_count(&self, node: usize) -> Result<usize> {
            if node < 2 {
                Ok(2)
            } else {
                Err(AdjacencyError::NodeOutOfBound { node, node_count: 2 })
            }
        }

        fn adjacent(&self, node: usize, slot: usize) -> Result<usize> {
            if slot == 0 {
                Ok(node)
            } else {
                Err(AdjacencyError::SlotOutOfBound { node, slot, len: 1 })
            }
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "inside 0..adjacent_count")]
    fn test_adjacents_asserts_on_broken_implementor() {
        let _ = ShortRows.adjacents(0).unwrap().count();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "inside 0..adjacent_count")]
    fn test_connections_asserts_on_broken_implementor() {
        let _ = ShortRows.connections().count();
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_broken_implementor_truncates_in_release() {
        assert_eq!(ShortRows.adjacents(1).unwrap().collect::<Vec<_>>(), vec![1]);
        assert_eq!(ShortRows.connections().collect::<Vec<_>>(), vec![(0, 0), (1, 1)]);
    }
}
