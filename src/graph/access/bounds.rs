//! Precondition checks shared by the adjacency backends.
//!
//! Every check returns the error a public operation should surface, so call
//! sites stay a flat sequence of `?` lines ahead of the single mutation.

use crate::error::{AdjacencyError, Result};

#[inline]
pub(crate) fn check_node(node: usize, node_count: usize) -> Result<()> {
    if node < node_count {
        Ok(())
    } else {
        reject!(AdjacencyError::NodeOutOfBound { node, node_count })
    }
}

/// `node` may also be one past the last node (an append position).
#[inline]
pub(crate) fn check_insert_node(node: usize, node_count: usize) -> Result<()> {
    if node <= node_count {
        Ok(())
    } else {
        reject!(AdjacencyError::NodeOutOfBound { node, node_count })
    }
}

/// `slot` must address an existing adjacent.
#[inline]
pub(crate) fn check_slot(node: usize, slot: usize, len: usize) -> Result<()> {
    if slot < len {
        Ok(())
    } else {
        reject!(AdjacencyError::SlotOutOfBound { node, slot, len })
    }
}

/// `slot` may also be one past the end (an append position).
#[inline]
pub(crate) fn check_insert_slot(node: usize, slot: usize, len: usize) -> Result<()> {
    if slot <= len {
        Ok(())
    } else {
        reject!(AdjacencyError::SlotOutOfBound { node, slot, len })
    }
}

#[inline]
pub(crate) fn check_absent(node: usize, adjacents: &[usize], adjacent: usize) -> Result<()> {
    if adjacents.contains(&adjacent) {
        reject!(AdjacencyError::DuplicateAdjacent { node, adjacent })
    }
    Ok(())
}

#[inline]
pub(crate) fn find_adjacent(node: usize, adjacents: &[usize], adjacent: usize) -> Result<usize> {
    match adjacents.iter().position(|&v| v == adjacent) {
        Some(slot) => Ok(slot),
        None => reject!(AdjacencyError::AdjacentNotFound { node, adjacent }),
    }
}

#[inline]
pub(crate) fn check_lengths(connections: usize, weights: usize) -> Result<()> {
    if connections == weights {
        Ok(())
    } else {
        reject!(AdjacencyError::LengthMismatch {
            connections,
            weights
        })
    }
}

/// Rejects the first destination that appears twice in `adjacents`.
///
/// `scratch` is reused across calls to avoid one allocation per node.
pub(crate) fn check_distinct(node: usize, adjacents: &[usize], scratch: &mut Vec<usize>) -> Result<()> {
    scratch.clear();
    scratch.extend_from_slice(adjacents);
    scratch.sort_unstable();
    if let Some(pair) = scratch.windows(2).find(|pair| pair[0] == pair[1]) {
        reject!(AdjacencyError::DuplicateAdjacent {
            node,
            adjacent: pair[0]
        })
    }
    Ok(())
}

/// Node count implied by a raw connection list: one past the largest index
/// appearing on either side, so every adjacent names an existing node.
///
/// An index of `usize::MAX` has no node count past it and is rejected.
pub(crate) fn implied_node_count(connections: &[(usize, usize)]) -> Result<usize> {
    let mut count = 0;
    for &(source, adjacent) in connections {
        let largest = source.max(adjacent);
        match largest.checked_add(1) {
            Some(needed) => count = count.max(needed),
            None => reject!(AdjacencyError::NodeOutOfBound {
                node: largest,
                node_count: usize::MAX
            }),
        }
    }
    Ok(count)
}
