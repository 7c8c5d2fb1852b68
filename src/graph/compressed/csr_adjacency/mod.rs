//! A compact, read-only adjacency list in CSR (compressed sparse row) layout.
//!
//! Memory layout:
//! - `offsets`: `Vec<usize>` of length `n + 1`; node `i` owns
//!   `targets[offsets[i]..offsets[i + 1]]`
//! - `targets`: every adjacent of every node, concatenated in node order
//!
//! There are no mutators. "Changing" a CSR list means building a new one,
//! usually by editing an [`AdjacencyList`] and snapshotting it again.

use crate::{
    error::{AdjacencyError, Result},
    graph::{
        access::bounds::{check_distinct, check_node, check_slot, implied_node_count},
        Adjacency, AdjacencyList,
    },
};

/// An immutable CSR adjacency list.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_connections` | \(O(m \log m)\) | Stable sort by source, one linear pass |
/// | `from_adjacency` | \(O(n + m)\) | One pass over the source's accessors |
/// | `adjacent_count` | \(O(1)\) | Offset difference |
/// | `adjacent` | \(O(1)\) | `targets[offsets[i] + slot]` |
/// | `neighbors` | \(O(1)\) | Borrowed slice |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsrAdjacency {
    offsets: Vec<usize>,
    targets: Vec<usize>,
}

impl Default for CsrAdjacency {
    fn default() -> Self {
        Self {
            offsets: vec![0],
            targets: Vec::new(),
        }
    }
}

impl CsrAdjacency {
    /// Builds a CSR list from `(source, adjacent)` pairs.
    ///
    /// Connections are stably sorted by source, so each node keeps its
    /// adjacents in input order. The node count is one past the largest
    /// index on either side of any pair; an empty input yields zero nodes.
    /// Destinations size the node range, so raw destination values belong in
    /// [`Self::with_nodes`].
    ///
    /// # Errors
    /// [`DuplicateAdjacent`](AdjacencyError::DuplicateAdjacent) if the same
    /// pair appears twice.
    /// [`NodeOutOfBound`](AdjacencyError::NodeOutOfBound) with
    /// `node_count: usize::MAX` if either side of a pair is `usize::MAX`.
    pub fn from_connections(connections: &[(usize, usize)]) -> Result<Self> {
        let (csr, _) = Self::from_connections_ordered(implied_node_count(connections)?, connections)?;
        Ok(csr)
    }

    /// Builds a CSR list with exactly `node_count` nodes.
    ///
    /// # Errors
    /// [`NodeOutOfBound`](AdjacencyError::NodeOutOfBound) for a source
    /// `>= node_count`, [`DuplicateAdjacent`](AdjacencyError::DuplicateAdjacent)
    /// for a repeated pair.
    pub fn with_nodes(node_count: usize, connections: &[(usize, usize)]) -> Result<Self> {
        let (csr, _) = Self::from_connections_ordered(node_count, connections)?;
        Ok(csr)
    }

    /// Shared builder for the plain and weighted CSR lists.
    ///
    /// Returns the list together with `order`, where `order[k]` is the input
    /// position of the connection stored at `targets[k]`. Weighted callers use
    /// it to lay their weights out in the same order.
    pub(crate) fn from_connections_ordered(
        node_count: usize,
        connections: &[(usize, usize)],
    ) -> Result<(Self, Vec<usize>)> {
        for &(source, _) in connections {
            check_node(source, node_count)?;
        }

        let mut order: Vec<usize> = (0..connections.len()).collect();
        order.sort_by_key(|&k| connections[k].0);

        let mut offsets = vec![0usize; node_count + 1];
        let mut targets = Vec::with_capacity(connections.len());
        let mut current = 0usize;
        for &k in &order {
            let (source, adjacent) = connections[k];
            // close every node between the previous source and this one
            while current < source {
                current += 1;
                offsets[current + 1] = offsets[current];
            }
            targets.push(adjacent);
            offsets[current + 1] += 1;
        }
        // trailing nodes with no adjacents
        while current + 1 < node_count {
            current += 1;
            offsets[current + 1] = offsets[current];
        }

        let csr = Self { offsets, targets };
        let mut scratch = Vec::new();
        for node in 0..node_count {
            check_distinct(node, csr.slice(node), &mut scratch)?;
        }

        debug_event!(
            nodes = node_count,
            connections = csr.targets.len(),
            "built CSR adjacency from connections"
        );
        Ok((csr, order))
    }

    /// Builds a CSR list directly from its raw parts.
    ///
    /// `offsets.len() - 1` is the node count. The errors below describe the
    /// malformed part, not an index the caller asked for.
    ///
    /// # Errors
    /// - [`NodeOutOfBound`](AdjacencyError::NodeOutOfBound) with `node: 0`
    ///   if `offsets` is empty or `offsets[0] != 0`
    /// - [`NodeOutOfBound`](AdjacencyError::NodeOutOfBound) with `node: i`
    ///   if `offsets[i + 1]` is below `offsets[i]` or past `targets.len()`
    /// - [`SlotOutOfBound`](AdjacencyError::SlotOutOfBound) with
    ///   `slot` = last offset and `len = targets.len()` if the last offset
    ///   stops short of the end of `targets`
    /// - [`DuplicateAdjacent`](AdjacencyError::DuplicateAdjacent) if a node
    ///   repeats an adjacent
    pub fn from_csr_parts(offsets: Vec<usize>, targets: Vec<usize>) -> Result<Self> {
        let node_count = offsets.len().saturating_sub(1);
        if offsets.first() != Some(&0) {
            reject!(AdjacencyError::NodeOutOfBound {
                node: 0,
                node_count
            });
        }
        for (node, pair) in offsets.windows(2).enumerate() {
            if pair[0] > pair[1] || pair[1] > targets.len() {
                reject!(AdjacencyError::NodeOutOfBound { node, node_count });
            }
        }
        let end = offsets[node_count];
        if end != targets.len() {
            reject!(AdjacencyError::SlotOutOfBound {
                node: node_count.saturating_sub(1),
                slot: end,
                len: targets.len()
            });
        }

        let csr = Self { offsets, targets };
        let mut scratch = Vec::new();
        for node in 0..node_count {
            check_distinct(node, csr.slice(node), &mut scratch)?;
        }
        Ok(csr)
    }

    /// Wraps parts produced by a builder that already upholds the invariants.
    pub(crate) fn from_csr_parts_unchecked(offsets: Vec<usize>, targets: Vec<usize>) -> Self {
        debug_assert_eq!(offsets.last().copied(), Some(targets.len()));
        Self { offsets, targets }
    }

    /// Snapshots any [`Adjacency`] through its accessors only.
    ///
    /// Offsets are sized from `node_count()` and targets reserved from
    /// `connection_count()` up front.
    pub fn from_adjacency<A: Adjacency + ?Sized>(source: &A) -> Result<Self> {
        let node_count = source.node_count();
        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::with_capacity(source.connection_count());
        offsets.push(0);
        for node in 0..node_count {
            let len = source.adjacent_count(node)?;
            for slot in 0..len {
                targets.push(source.adjacent(node, slot)?);
            }
            offsets.push(targets.len());
        }

        debug_event!(
            nodes = node_count,
            connections = targets.len(),
            "snapshotted CSR adjacency through the adjacency contract"
        );
        Ok(Self { offsets, targets })
    }

    /// Replaces the contents of `self` with a snapshot of `source`.
    ///
    /// On error `self` is left unchanged.
    pub fn assign_from<A: Adjacency + ?Sized>(&mut self, source: &A) -> Result<()> {
        *self = Self::from_adjacency(source)?;
        Ok(())
    }

    /// The adjacents of `node` as a slice.
    pub fn neighbors(&self, node: usize) -> Result<&[usize]> {
        check_node(node, self.node_count())?;
        Ok(self.slice(node))
    }

    /// Iterates the adjacency slices of all nodes in node order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[usize]> + '_ {
        self.offsets
            .windows(2)
            .map(move |pair| &self.targets[pair[0]..pair[1]])
    }

    /// The offsets array (`node_count() + 1` entries).
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Every adjacent, concatenated in node order.
    pub fn targets(&self) -> &[usize] {
        &self.targets
    }

    /// Consumes the list, returning `(offsets, targets)`.
    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>) {
        (self.offsets, self.targets)
    }

    /// Range of `targets` owned by `node`. Caller checks the bound.
    #[inline]
    pub(crate) fn span(&self, node: usize) -> core::ops::Range<usize> {
        self.offsets[node]..self.offsets[node + 1]
    }

    #[inline]
    fn slice(&self, node: usize) -> &[usize] {
        &self.targets[self.span(node)]
    }
}

#[cfg(feature = "parallel")]
impl CsrAdjacency {
    /// Parallel iterator over `(node, adjacents)` for every node.
    pub fn par_neighborhoods(
        &self,
    ) -> impl rayon::iter::IndexedParallelIterator<Item = (usize, &[usize])> + '_ {
        use rayon::prelude::*;
        (0..self.node_count())
            .into_par_iter()
            .map(move |node| (node, self.slice(node)))
    }
}

impl Adjacency for CsrAdjacency {
    #[inline]
    fn node_count(&self) -> usize {
        // `offsets` always holds `n + 1` entries
        self.offsets.len() - 1
    }

    #[inline]
    fn connection_count(&self) -> usize {
        self.targets.len()
    }

    #[inline]
    fn adjacent_count(&self, node: usize) -> Result<usize> {
        check_node(node, self.node_count())?;
        Ok(self.offsets[node + 1] - self.offsets[node])
    }

    #[inline]
    fn adjacent(&self, node: usize, slot: usize) -> Result<usize> {
        let len = self.adjacent_count(node)?;
        check_slot(node, slot, len)?;
        Ok(self.targets[self.offsets[node] + slot])
    }

    fn position_of(&self, node: usize, adjacent: usize) -> Result<Option<usize>> {
        check_node(node, self.node_count())?;
        Ok(self.slice(node).iter().position(|&v| v == adjacent))
    }
}

impl From<&AdjacencyList> for CsrAdjacency {
    /// Freezes a mutable list without going through the fallible accessors.
    fn from(list: &AdjacencyList) -> Self {
        let mut offsets = Vec::with_capacity(list.node_count() + 1);
        let mut targets = Vec::with_capacity(list.connection_count());
        offsets.push(0);
        for adjacents in list.iter() {
            targets.extend_from_slice(adjacents);
            offsets.push(targets.len());
        }
        Self { offsets, targets }
    }
}

impl From<&CsrAdjacency> for AdjacencyList {
    /// Thaws a CSR list into an editable one.
    fn from(csr: &CsrAdjacency) -> Self {
        AdjacencyList::from_raw(csr.iter().map(<[usize]>::to_vec).collect())
    }
}
