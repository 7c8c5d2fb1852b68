//! A compact weighted adjacency list: CSR structure plus one flat weight array.
//!
//! `weights[k]` is the weight of the connection stored at `targets[k]` of the
//! inner [`CsrAdjacency`], so a node's weights are the same offset range as
//! its adjacents.

use crate::{
    error::Result,
    graph::{
        access::bounds::{check_lengths, check_node, check_slot, implied_node_count},
        Adjacency, AdjacencyList, CsrAdjacency, Weight, WeightedAdjacency, WeightedAdjacencyList,
    },
};

/// An immutable weighted CSR adjacency list.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedCsrAdjacency<W: Weight = f64> {
    csr: CsrAdjacency,
    weights: Vec<W>,
}

impl<W: Weight> Default for WeightedCsrAdjacency<W> {
    fn default() -> Self {
        Self {
            csr: CsrAdjacency::default(),
            weights: Vec::new(),
        }
    }
}

impl<W: Weight> WeightedCsrAdjacency<W> {
    /// Builds a weighted CSR list from `(source, adjacent)` pairs and a weight
    /// per pair, in the same single pass as [`CsrAdjacency::from_connections`].
    ///
    /// # Errors
    /// [`LengthMismatch`](crate::AdjacencyError::LengthMismatch) when the
    /// slices differ in length, otherwise the errors of
    /// [`CsrAdjacency::from_connections`].
    pub fn from_weighted_connections(connections: &[(usize, usize)], weights: &[W]) -> Result<Self> {
        check_lengths(connections.len(), weights.len())?;
        Self::with_nodes(implied_node_count(connections)?, connections, weights)
    }

    /// Like [`Self::from_weighted_connections`] with an explicit node count.
    pub fn with_nodes(node_count: usize, connections: &[(usize, usize)], weights: &[W]) -> Result<Self> {
        check_lengths(connections.len(), weights.len())?;
        let (csr, order) = CsrAdjacency::from_connections_ordered(node_count, connections)?;
        let weights = order.into_iter().map(|k| weights[k]).collect();
        Ok(Self { csr, weights })
    }

    /// Snapshots an unweighted [`Adjacency`], giving every connection weight
    /// `W::one()`.
    pub fn from_adjacency<A: Adjacency + ?Sized>(source: &A) -> Result<Self> {
        Ok(Self::from(CsrAdjacency::from_adjacency(source)?))
    }

    /// Snapshots any [`WeightedAdjacency`], appending each weight alongside
    /// its adjacent.
    pub fn from_weighted<A>(source: &A) -> Result<Self>
    where
        A: WeightedAdjacency<Weight = W> + ?Sized,
    {
        let node_count = source.node_count();
        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::with_capacity(source.connection_count());
        let mut weights = Vec::with_capacity(source.connection_count());
        offsets.push(0);
        for node in 0..node_count {
            let len = source.adjacent_count(node)?;
            for slot in 0..len {
                let (adjacent, weight) = source.weighted_adjacent(node, slot)?;
                targets.push(adjacent);
                weights.push(weight);
            }
            offsets.push(targets.len());
        }

        debug_event!(
            nodes = node_count,
            connections = targets.len(),
            "snapshotted weighted CSR adjacency through the weighted contract"
        );
        Ok(Self {
            csr: CsrAdjacency::from_csr_parts_unchecked(offsets, targets),
            weights,
        })
    }

    /// Replaces `self` with a unit-weight snapshot of `source`.
    pub fn assign_from<A: Adjacency + ?Sized>(&mut self, source: &A) -> Result<()> {
        *self = Self::from_adjacency(source)?;
        Ok(())
    }

    /// Replaces `self` with a weighted snapshot of `source`.
    pub fn assign_from_weighted<A>(&mut self, source: &A) -> Result<()>
    where
        A: WeightedAdjacency<Weight = W> + ?Sized,
    {
        *self = Self::from_weighted(source)?;
        Ok(())
    }

    /// The structural half of the list.
    pub fn as_csr(&self) -> &CsrAdjacency {
        &self.csr
    }

    /// Drops the weights and returns the structure.
    pub fn into_csr(self) -> CsrAdjacency {
        self.csr
    }

    /// The adjacents of `node` as a slice.
    pub fn neighbors(&self, node: usize) -> Result<&[usize]> {
        self.csr.neighbors(node)
    }

    /// The weights of `node`, aligned with [`Self::neighbors`].
    pub fn weights(&self, node: usize) -> Result<&[W]> {
        check_node(node, self.csr.node_count())?;
        Ok(&self.weights[self.csr.span(node)])
    }

    /// Every weight, aligned with [`CsrAdjacency::targets`].
    pub fn flat_weights(&self) -> &[W] {
        &self.weights
    }

    /// Iterates `(adjacents, weights)` slice pairs in node order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&[usize], &[W])> + '_ {
        self.csr
            .offsets()
            .windows(2)
            .map(move |pair| {
                (
                    &self.csr.targets()[pair[0]..pair[1]],
                    &self.weights[pair[0]..pair[1]],
                )
            })
    }
}

#[cfg(feature = "parallel")]
impl<W: Weight> WeightedCsrAdjacency<W> {
    /// Parallel iterator over `(node, adjacents, weights)` for every node.
    pub fn par_neighborhoods(
        &self,
    ) -> impl rayon::iter::IndexedParallelIterator<Item = (usize, &[usize], &[W])> + '_ {
        use rayon::prelude::*;
        (0..self.csr.node_count()).into_par_iter().map(move |node| {
            let span = self.csr.span(node);
            (node, &self.csr.targets()[span.clone()], &self.weights[span])
        })
    }
}

impl<W: Weight> Adjacency for WeightedCsrAdjacency<W> {
    #[inline]
    fn node_count(&self) -> usize {
        self.csr.node_count()
    }

    #[inline]
    fn connection_count(&self) -> usize {
        self.csr.connection_count()
    }

    #[inline]
    fn adjacent_count(&self, node: usize) -> Result<usize> {
        self.csr.adjacent_count(node)
    }

    #[inline]
    fn adjacent(&self, node: usize, slot: usize) -> Result<usize> {
        self.csr.adjacent(node, slot)
    }

    fn position_of(&self, node: usize, adjacent: usize) -> Result<Option<usize>> {
        self.csr.position_of(node, adjacent)
    }
}

impl<W: Weight> WeightedAdjacency for WeightedCsrAdjacency<W> {
    type Weight = W;

    #[inline]
    fn weight(&self, node: usize, slot: usize) -> Result<W> {
        let len = self.csr.adjacent_count(node)?;
        check_slot(node, slot, len)?;
        Ok(self.weights[self.csr.span(node).start + slot])
    }
}

impl<W: Weight> From<CsrAdjacency> for WeightedCsrAdjacency<W> {
    /// Adopts an unweighted CSR list, giving every connection weight `W::one()`.
    fn from(csr: CsrAdjacency) -> Self {
        let weights = vec![W::one(); csr.connection_count()];
        Self { csr, weights }
    }
}

impl<W: Weight> From<&WeightedAdjacencyList<W>> for WeightedCsrAdjacency<W> {
    /// Freezes a weighted list without going through the fallible accessors.
    fn from(list: &WeightedAdjacencyList<W>) -> Self {
        let mut weights = Vec::with_capacity(list.connection_count());
        for (_, row) in list.iter() {
            weights.extend_from_slice(row);
        }
        Self {
            csr: CsrAdjacency::from(list.as_list()),
            weights,
        }
    }
}

impl<W: Weight> From<&WeightedCsrAdjacency<W>> for WeightedAdjacencyList<W> {
    /// Thaws a weighted CSR list into an editable one.
    fn from(csr: &WeightedCsrAdjacency<W>) -> Self {
        let weights = csr.iter().map(|(_, row)| row.to_vec()).collect();
        WeightedAdjacencyList::from_raw(AdjacencyList::from(&csr.csr), weights)
    }
}
