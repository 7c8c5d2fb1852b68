//! A mutable adjacency list whose connections carry weights.
//!
//! The structure lives in an owned [`AdjacencyList`]; weights live in a
//! parallel `Vec<Vec<W>>` with one entry per adjacent. Every mutator runs the
//! list operation first (which performs all the checks) and only then applies
//! the matching edit to the weights, so a rejected call touches neither store.

use crate::{
    error::Result,
    graph::{
        access::bounds::{check_lengths, check_node, check_slot, find_adjacent, implied_node_count},
        Adjacency, AdjacencyList, Weight, WeightedAdjacency,
    },
};

/// A mutable weighted adjacency list.
///
/// Unweighted insertions (`add_adjacent`, `insert_adjacent`) store
/// `W::one()`; destination-only edits (`update_adjacent`, `replace_adjacent`)
/// keep the existing weight.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedAdjacencyList<W: Weight = f64> {
    list: AdjacencyList,
    weights: Vec<Vec<W>>,
}

impl<W: Weight> Default for WeightedAdjacencyList<W> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<W: Weight> WeightedAdjacencyList<W> {
    /// Creates a list with `node_count` nodes and no connections.
    pub fn new(node_count: usize) -> Self {
        Self {
            list: AdjacencyList::new(node_count),
            weights: vec![Vec::new(); node_count],
        }
    }

    /// Builds a list from `(source, adjacent)` pairs and a weight per pair.
    ///
    /// # Errors
    /// [`LengthMismatch`](crate::AdjacencyError::LengthMismatch) when the two
    /// slices differ in length, otherwise the errors of
    /// [`AdjacencyList::from_connections`].
    pub fn from_weighted_connections(connections: &[(usize, usize)], weights: &[W]) -> Result<Self> {
        check_lengths(connections.len(), weights.len())?;
        Self::with_nodes(implied_node_count(connections)?, connections, weights)
    }

    /// Like [`Self::from_weighted_connections`] with an explicit node count.
    pub fn with_nodes(node_count: usize, connections: &[(usize, usize)], weights: &[W]) -> Result<Self> {
        check_lengths(connections.len(), weights.len())?;
        let list = AdjacencyList::with_nodes(node_count, connections)?;

        // adjacents were appended in input order, so weights follow suit
        let mut aligned: Vec<Vec<W>> = list
            .iter()
            .map(|adjacents| Vec::with_capacity(adjacents.len()))
            .collect();
        for (&(source, _), &weight) in connections.iter().zip(weights) {
            aligned[source].push(weight);
        }

        Ok(Self {
            list,
            weights: aligned,
        })
    }

    /// Rebuilds a list from an unweighted [`Adjacency`], giving every
    /// connection weight `W::one()`.
    pub fn from_adjacency<A: Adjacency + ?Sized>(source: &A) -> Result<Self> {
        Ok(Self::from(AdjacencyList::from_adjacency(source)?))
    }

    /// Rebuilds a list from any [`WeightedAdjacency`], copying its weights.
    pub fn from_weighted<A>(source: &A) -> Result<Self>
    where
        A: WeightedAdjacency<Weight = W> + ?Sized,
    {
        let list = AdjacencyList::from_adjacency(source)?;
        let mut weights = Vec::with_capacity(list.node_count());
        for (node, adjacents) in list.iter().enumerate() {
            let mut row = Vec::with_capacity(adjacents.len());
            for slot in 0..adjacents.len() {
                row.push(source.weight(node, slot)?);
            }
            weights.push(row);
        }

        debug_event!(
            nodes = list.node_count(),
            connections = list.connection_count(),
            "copied weighted adjacency list through the weighted contract"
        );
        Ok(Self { list, weights })
    }

    /// Replaces `self` with an unweighted copy of `source` (unit weights).
    pub fn assign_from<A: Adjacency + ?Sized>(&mut self, source: &A) -> Result<()> {
        *self = Self::from_adjacency(source)?;
        Ok(())
    }

    /// Replaces `self` with a weighted copy of `source`.
    pub fn assign_from_weighted<A>(&mut self, source: &A) -> Result<()>
    where
        A: WeightedAdjacency<Weight = W> + ?Sized,
    {
        *self = Self::from_weighted(source)?;
        Ok(())
    }

    /// Pairs a structure with weights that already line up with it.
    pub(crate) fn from_raw(list: AdjacencyList, weights: Vec<Vec<W>>) -> Self {
        debug_assert!(list.iter().zip(&weights).all(|(a, w)| a.len() == w.len()));
        Self { list, weights }
    }

    /// The structural half of the list.
    pub fn as_list(&self) -> &AdjacencyList {
        &self.list
    }

    /// Drops the weights and returns the structure.
    pub fn into_list(self) -> AdjacencyList {
        self.list
    }

    /// Splits into the structure and its per-node weights.
    pub fn into_parts(self) -> (AdjacencyList, Vec<Vec<W>>) {
        (self.list, self.weights)
    }

    /// The adjacents of `node` as a slice.
    pub fn neighbors(&self, node: usize) -> Result<&[usize]> {
        self.list.neighbors(node)
    }

    /// The weights of `node`, aligned with [`Self::neighbors`].
    pub fn weights(&self, node: usize) -> Result<&[W]> {
        check_node(node, self.weights.len())?;
        Ok(&self.weights[node])
    }

    /// Iterates `(adjacents, weights)` slice pairs in node order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&[usize], &[W])> + '_ {
        self.list.iter().zip(self.weights.iter().map(Vec::as_slice))
    }

    /// Appends an empty node and returns its index.
    pub fn add_node(&mut self) -> usize {
        self.weights.push(Vec::new());
        self.list.add_node()
    }

    /// Inserts an empty node at `node`; see [`AdjacencyList::insert_node`].
    pub fn insert_node(&mut self, node: usize) -> Result<()> {
        self.list.insert_node(node)?;
        self.weights.insert(node, Vec::new());
        Ok(())
    }

    /// Exchanges the adjacents and weights of nodes `a` and `b`.
    pub fn swap_nodes(&mut self, a: usize, b: usize) -> Result<()> {
        self.list.swap_nodes(a, b)?;
        self.weights.swap(a, b);
        Ok(())
    }

    /// Removes `node` with its adjacents and weights.
    pub fn remove_node(&mut self, node: usize) -> Result<()> {
        self.list.remove_node(node)?;
        self.weights.remove(node);
        Ok(())
    }

    /// Removes every connection of `node`.
    pub fn clear_adjacents(&mut self, node: usize) -> Result<usize> {
        let dropped = self.list.clear_adjacents(node)?;
        self.weights[node].clear();
        Ok(dropped)
    }

    /// Appends `adjacent` with weight `W::one()`.
    pub fn add_adjacent(&mut self, node: usize, adjacent: usize) -> Result<()> {
        self.add_weighted_adjacent(node, (adjacent, W::one()))
    }

    /// Appends `adjacent` with the given weight.
    pub fn add_weighted_adjacent(&mut self, node: usize, (adjacent, weight): (usize, W)) -> Result<()> {
        self.list.add_adjacent(node, adjacent)?;
        self.weights[node].push(weight);
        Ok(())
    }

    /// Inserts `adjacent` at `slot` with weight `W::one()`.
    pub fn insert_adjacent(&mut self, node: usize, adjacent: usize, slot: usize) -> Result<()> {
        self.insert_weighted_adjacent(node, (adjacent, W::one()), slot)
    }

    /// Inserts `adjacent` and its weight at `slot`.
    pub fn insert_weighted_adjacent(
        &mut self,
        node: usize,
        (adjacent, weight): (usize, W),
        slot: usize,
    ) -> Result<()> {
        self.list.insert_adjacent(node, adjacent, slot)?;
        self.weights[node].insert(slot, weight);
        Ok(())
    }

    /// Overwrites the destination at `slot`, keeping its weight.
    pub fn update_adjacent(&mut self, node: usize, adjacent: usize, slot: usize) -> Result<()> {
        self.list.update_adjacent(node, adjacent, slot)
    }

    /// Overwrites both the destination and the weight at `slot`.
    ///
    /// Passing the destination already stored there just updates the weight.
    pub fn update_weighted_adjacent(
        &mut self,
        node: usize,
        (adjacent, weight): (usize, W),
        slot: usize,
    ) -> Result<()> {
        self.list.update_adjacent(node, adjacent, slot)?;
        self.weights[node][slot] = weight;
        Ok(())
    }

    /// Overwrites the weight at `slot`, keeping its destination.
    pub fn update_weight(&mut self, node: usize, slot: usize, weight: W) -> Result<()> {
        check_node(node, self.weights.len())?;
        check_slot(node, slot, self.weights[node].len())?;
        self.weights[node][slot] = weight;
        Ok(())
    }

    /// Replaces destination `old` with `new`, keeping the weight.
    pub fn replace_adjacent(&mut self, node: usize, old: usize, new: usize) -> Result<usize> {
        self.list.replace_adjacent(node, old, new)
    }

    /// Sets the weight of the connection to `adjacent`, keeping the
    /// destination. Returns the slot that was changed.
    ///
    /// # Errors
    /// [`AdjacentNotFound`](crate::AdjacencyError::AdjacentNotFound) if
    /// `adjacent` is not adjacent to `node`.
    pub fn replace_weight(&mut self, node: usize, adjacent: usize, weight: W) -> Result<usize> {
        let slot = find_adjacent(node, self.list.neighbors(node)?, adjacent)?;
        self.weights[node][slot] = weight;
        Ok(slot)
    }

    /// Replaces destination `old` with `new` and sets its weight.
    pub fn replace_weighted_adjacent(
        &mut self,
        node: usize,
        old: usize,
        (new, weight): (usize, W),
    ) -> Result<usize> {
        let slot = self.list.replace_adjacent(node, old, new)?;
        self.weights[node][slot] = weight;
        Ok(slot)
    }

    /// Removes the connection at `slot`, returning its destination and weight.
    pub fn remove_adjacent(&mut self, node: usize, slot: usize) -> Result<(usize, W)> {
        let adjacent = self.list.remove_adjacent(node, slot)?;
        let weight = self.weights[node].remove(slot);
        Ok((adjacent, weight))
    }
}

impl<W: Weight> Adjacency for WeightedAdjacencyList<W> {
    #[inline]
    fn node_count(&self) -> usize {
        self.list.node_count()
    }

    #[inline]
    fn connection_count(&self) -> usize {
        self.list.connection_count()
    }

    #[inline]
    fn adjacent_count(&self, node: usize) -> Result<usize> {
        self.list.adjacent_count(node)
    }

    #[inline]
    fn adjacent(&self, node: usize, slot: usize) -> Result<usize> {
        self.list.adjacent(node, slot)
    }

    fn position_of(&self, node: usize, adjacent: usize) -> Result<Option<usize>> {
        self.list.position_of(node, adjacent)
    }
}

impl<W: Weight> WeightedAdjacency for WeightedAdjacencyList<W> {
    type Weight = W;

    #[inline]
    fn weight(&self, node: usize, slot: usize) -> Result<W> {
        check_node(node, self.weights.len())?;
        let row = &self.weights[node];
        check_slot(node, slot, row.len())?;
        Ok(row[slot])
    }
}

impl<W: Weight> From<AdjacencyList> for WeightedAdjacencyList<W> {
    /// Adopts an unweighted list, giving every connection weight `W::one()`.
    fn from(list: AdjacencyList) -> Self {
        let weights = list
            .iter()
            .map(|adjacents| vec![W::one(); adjacents.len()])
            .collect();
        Self { list, weights }
    }
}
