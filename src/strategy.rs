//! `proptest` strategies that generate valid adjacency inputs.
//!
//! Every strategy here produces input the constructors accept: sources are
//! dense in `0..nodes` and no source repeats an adjacent. Adjacents are drawn
//! from the same range, so they also name real nodes.

use proptest::{
    collection::{btree_set, vec},
    prelude::*,
};

use crate::graph::{AdjacencyList, WeightedAdjacencyList};

/// Per-node distinct adjacent rows for `1..=max_nodes` nodes, each row
/// holding at most `max_degree` adjacents.
pub fn rows(max_nodes: usize, max_degree: usize) -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1..=max_nodes.max(1)).prop_flat_map(move |nodes| {
        let row = btree_set(0..nodes, 0..=max_degree.min(nodes))
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
            .prop_shuffle();
        vec(row, nodes)
    })
}

/// `(source, adjacent)` pairs in shuffled order, free of duplicates.
pub fn connections(max_nodes: usize, max_degree: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    rows(max_nodes, max_degree)
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .flat_map(|(node, row)| row.into_iter().map(move |adjacent| (node, adjacent)))
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

/// Like [`connections`] with one finite weight per pair.
pub fn weighted_connections(
    max_nodes: usize,
    max_degree: usize,
) -> impl Strategy<Value = (Vec<(usize, usize)>, Vec<f64>)> {
    connections(max_nodes, max_degree).prop_flat_map(|pairs| {
        let len = pairs.len();
        (Just(pairs), vec(-1.0e6_f64..1.0e6, len))
    })
}

/// A ready-made [`AdjacencyList`]; isolated trailing nodes are kept.
pub fn adjacency_list(max_nodes: usize, max_degree: usize) -> impl Strategy<Value = AdjacencyList> {
    rows(max_nodes, max_degree).prop_map(AdjacencyList::from_raw)
}

/// A ready-made [`WeightedAdjacencyList`] with finite weights.
pub fn weighted_adjacency_list(
    max_nodes: usize,
    max_degree: usize,
) -> impl Strategy<Value = WeightedAdjacencyList<f64>> {
    rows(max_nodes, max_degree).prop_flat_map(|rows| {
        let total = rows.iter().map(Vec::len).sum::<usize>();
        (Just(rows), vec(-1.0e6_f64..1.0e6, total)).prop_map(|(rows, flat)| {
            let mut flat = flat.into_iter();
            let weights = rows
                .iter()
                .map(|row| flat.by_ref().take(row.len()).collect())
                .collect();
            WeightedAdjacencyList::from_raw(AdjacencyList::from_raw(rows), weights)
        })
    })
}
