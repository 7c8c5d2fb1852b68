//! A growable adjacency list built for structural editing.
//!
//! Each node owns a `Vec<usize>` of adjacents, and the total connection count
//! is cached alongside so [`Adjacency::connection_count`] stays \(O(1)\).
//!
//! Node edits use *raw-index* semantics: inserting, removing or swapping nodes
//! moves whole adjacency vectors but never rewrites the values stored in
//! them. An adjacent that named node 5 before `remove_node(2)` still holds
//! the value 5 afterwards, even though the node formerly at 5 is now at 4.

use crate::{
    error::Result,
    graph::{
        access::bounds::{
            check_absent, check_insert_node, check_insert_slot, check_node, check_slot, find_adjacent,
            implied_node_count,
        },
        Adjacency,
    },
};

/// A mutable adjacency list.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_node` | \(O(1)\) amortized | Appends an empty vector |
/// | `insert_node` / `remove_node` | \(O(n)\) | Shifts the node vector |
/// | `swap_nodes` | \(O(1)\) | Swaps vector headers |
/// | `add_adjacent` | \(O(\text{degree})\) | Duplicate scan, then push |
/// | `insert_adjacent` / `remove_adjacent` | \(O(\text{degree})\) | Shifts within the node |
/// | `update_adjacent` / `replace_adjacent` | \(O(\text{degree})\) | Duplicate scan |
/// | `adjacent` / `adjacent_count` | \(O(1)\) | |
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    adjacency: Vec<Vec<usize>>,
    connections: usize,
}

impl AdjacencyList {
    /// Creates a list with `node_count` nodes and no connections.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            connections: 0,
        }
    }

    /// Builds a list from `(source, adjacent)` pairs.
    ///
    /// The node count is one past the largest index on either side of any
    /// pair; nodes that never appear as a source get no adjacents. Adjacents
    /// keep their input order. Use [`Self::with_nodes`] to fix the count.
    ///
    /// Destinations size the node range too: `[(0, 1_000_000)]` allocates
    /// 1,000,001 nodes. Pass raw destination values through
    /// [`Self::with_nodes`] instead.
    ///
    /// # Errors
    /// [`DuplicateAdjacent`](crate::AdjacencyError::DuplicateAdjacent) if the
    /// same pair appears twice.
    /// [`NodeOutOfBound`](crate::AdjacencyError::NodeOutOfBound) with
    /// `node_count: usize::MAX` if either side of a pair is `usize::MAX`.
    pub fn from_connections(connections: &[(usize, usize)]) -> Result<Self> {
        Self::with_nodes(implied_node_count(connections)?, connections)
    }

    /// Builds a list with exactly `node_count` nodes from `(source, adjacent)`
    /// pairs.
    ///
    /// # Errors
    /// [`NodeOutOfBound`](crate::AdjacencyError::NodeOutOfBound) for a source
    /// `>= node_count`, [`DuplicateAdjacent`](crate::AdjacencyError::DuplicateAdjacent)
    /// for a repeated pair.
    pub fn with_nodes(node_count: usize, connections: &[(usize, usize)]) -> Result<Self> {
        let mut degrees = vec![0usize; node_count];
        for &(source, _) in connections {
            check_node(source, node_count)?;
            degrees[source] += 1;
        }

        let mut list = Self {
            adjacency: degrees.into_iter().map(Vec::with_capacity).collect(),
            connections: 0,
        };
        for &(source, adjacent) in connections {
            list.add_adjacent(source, adjacent)?;
        }

        debug_event!(
            nodes = list.node_count(),
            connections = list.connections,
            "built adjacency list from connections"
        );
        Ok(list)
    }

    /// Rebuilds a list from any [`Adjacency`] through its accessors only.
    ///
    /// Storage is reserved from the counts the source reports, so no buffer
    /// grows during the copy.
    pub fn from_adjacency<A: Adjacency + ?Sized>(source: &A) -> Result<Self> {
        let node_count = source.node_count();
        let mut adjacency = Vec::with_capacity(node_count);
        let mut connections = 0;
        for node in 0..node_count {
            let len = source.adjacent_count(node)?;
            connections += len;
            let mut adjacents = Vec::with_capacity(len);
            for slot in 0..len {
                adjacents.push(source.adjacent(node, slot)?);
            }
            adjacency.push(adjacents);
        }

        let list = Self {
            adjacency,
            connections,
        };
        debug_event!(
            nodes = node_count,
            connections = list.connections,
            "copied adjacency list through the adjacency contract"
        );
        Ok(list)
    }

    /// Wraps per-node vectors that already satisfy the no-duplicate invariant.
    pub(crate) fn from_raw(adjacency: Vec<Vec<usize>>) -> Self {
        let connections = adjacency.iter().map(Vec::len).sum();
        Self {
            adjacency,
            connections,
        }
    }

    /// Replaces the contents of `self` with a copy of `source`.
    ///
    /// On error `self` is left unchanged.
    pub fn assign_from<A: Adjacency + ?Sized>(&mut self, source: &A) -> Result<()> {
        *self = Self::from_adjacency(source)?;
        Ok(())
    }

    /// The adjacents of `node` as a slice.
    pub fn neighbors(&self, node: usize) -> Result<&[usize]> {
        check_node(node, self.adjacency.len())?;
        Ok(&self.adjacency[node])
    }

    /// Iterates the adjacency slices of all nodes in node order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[usize]> + '_ {
        self.adjacency.iter().map(Vec::as_slice)
    }

    /// Appends an empty node and returns its index.
    pub fn add_node(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    /// Inserts an empty node at `node`, shifting later nodes up by one.
    ///
    /// `node` may equal `node_count()`, which behaves like [`Self::add_node`].
    /// Stored adjacent values are not relabeled.
    pub fn insert_node(&mut self, node: usize) -> Result<()> {
        check_insert_node(node, self.adjacency.len())?;
        self.adjacency.insert(node, Vec::new());
        Ok(())
    }

    /// Exchanges the adjacents of nodes `a` and `b`. A no-op when `a == b`.
    pub fn swap_nodes(&mut self, a: usize, b: usize) -> Result<()> {
        check_node(a, self.adjacency.len())?;
        check_node(b, self.adjacency.len())?;
        self.adjacency.swap(a, b);
        Ok(())
    }

    /// Removes `node` together with its adjacents, shifting later nodes down.
    ///
    /// Stored adjacent values are not relabeled.
    pub fn remove_node(&mut self, node: usize) -> Result<()> {
        check_node(node, self.adjacency.len())?;
        let removed = self.adjacency.remove(node);
        self.connections -= removed.len();
        Ok(())
    }

    /// Removes every adjacent of `node` and returns how many were dropped.
    pub fn clear_adjacents(&mut self, node: usize) -> Result<usize> {
        check_node(node, self.adjacency.len())?;
        let dropped = self.adjacency[node].len();
        self.adjacency[node].clear();
        self.connections -= dropped;
        Ok(dropped)
    }

    /// Appends `adjacent` to the adjacents of `node`.
    pub fn add_adjacent(&mut self, node: usize, adjacent: usize) -> Result<()> {
        check_node(node, self.adjacency.len())?;
        check_absent(node, &self.adjacency[node], adjacent)?;
        self.adjacency[node].push(adjacent);
        self.connections += 1;
        Ok(())
    }

    /// Inserts `adjacent` at `slot`, shifting later adjacents of `node` right.
    ///
    /// `slot` may equal the current adjacent count (append).
    pub fn insert_adjacent(&mut self, node: usize, adjacent: usize, slot: usize) -> Result<()> {
        check_node(node, self.adjacency.len())?;
        let adjacents = &self.adjacency[node];
        check_insert_slot(node, slot, adjacents.len())?;
        check_absent(node, adjacents, adjacent)?;
        self.adjacency[node].insert(slot, adjacent);
        self.connections += 1;
        Ok(())
    }

    /// Overwrites the adjacent at `slot` with `adjacent`.
    ///
    /// Writing the value already stored there is a no-op.
    pub fn update_adjacent(&mut self, node: usize, adjacent: usize, slot: usize) -> Result<()> {
        check_node(node, self.adjacency.len())?;
        let adjacents = &self.adjacency[node];
        check_slot(node, slot, adjacents.len())?;
        if adjacents[slot] == adjacent {
            return Ok(());
        }
        check_absent(node, adjacents, adjacent)?;
        self.adjacency[node][slot] = adjacent;
        Ok(())
    }

    /// Replaces the adjacent `old` of `node` with `new`, keeping its slot.
    ///
    /// Returns the slot that was rewritten.
    ///
    /// # Errors
    /// [`AdjacentNotFound`](crate::AdjacencyError::AdjacentNotFound) if `old`
    /// is absent, [`DuplicateAdjacent`](crate::AdjacencyError::DuplicateAdjacent)
    /// if `new` is already present (including `new == old`).
    pub fn replace_adjacent(&mut self, node: usize, old: usize, new: usize) -> Result<usize> {
        check_node(node, self.adjacency.len())?;
        let adjacents = &self.adjacency[node];
        let slot = find_adjacent(node, adjacents, old)?;
        check_absent(node, adjacents, new)?;
        self.adjacency[node][slot] = new;
        Ok(slot)
    }

    /// Removes the adjacent at `slot` and returns it.
    pub fn remove_adjacent(&mut self, node: usize, slot: usize) -> Result<usize> {
        check_node(node, self.adjacency.len())?;
        check_slot(node, slot, self.adjacency[node].len())?;
        let removed = self.adjacency[node].remove(slot);
        self.connections -= 1;
        Ok(removed)
    }
}

impl Adjacency for AdjacencyList {
    #[inline]
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    fn connection_count(&self) -> usize {
        self.connections
    }

    #[inline]
    fn adjacent_count(&self, node: usize) -> Result<usize> {
        check_node(node, self.adjacency.len())?;
        Ok(self.adjacency[node].len())
    }

    #[inline]
    fn adjacent(&self, node: usize, slot: usize) -> Result<usize> {
        check_node(node, self.adjacency.len())?;
        let adjacents = &self.adjacency[node];
        check_slot(node, slot, adjacents.len())?;
        Ok(adjacents[slot])
    }

    fn position_of(&self, node: usize, adjacent: usize) -> Result<Option<usize>> {
        check_node(node, self.adjacency.len())?;
        Ok(self.adjacency[node].iter().position(|&v| v == adjacent))
    }
}

#[cfg(test)]
mod tests;
