//! Tests for the mutable adjacency list.

use super::*;
use crate::error::{AdjacencyError, ErrorKind};

fn degree_sum(list: &AdjacencyList) -> usize {
    list.iter().map(<[usize]>::len).sum()
}

#[test]
fn test_new_has_empty_nodes() {
    let list = AdjacencyList::new(4);
    assert_eq!(list.node_count(), 4);
    assert_eq!(list.connection_count(), 0);
    for node in 0..4 {
        assert_eq!(list.adjacent_count(node), Ok(0));
    }
    assert!(AdjacencyList::default().is_empty());
}

#[test]
fn test_from_connections_keeps_input_order() {
    let list = AdjacencyList::from_connections(&[(2, 0), (0, 3), (2, 1), (0, 1)]).unwrap();
    // node 3 only appears as an adjacent but still exists
    assert_eq!(list.node_count(), 4);
    assert_eq!(list.connection_count(), 4);
    assert_eq!(list.neighbors(0).unwrap(), &[3, 1]);
    assert!(list.neighbors(1).unwrap().is_empty());
    assert_eq!(list.neighbors(2).unwrap(), &[0, 1]);
    assert!(list.neighbors(3).unwrap().is_empty());
}

#[test]
fn test_from_connections_rejects_repeated_pair() {
    let err = AdjacencyList::from_connections(&[(0, 1), (1, 0), (0, 1)]).unwrap_err();
    assert_eq!(err, AdjacencyError::DuplicateAdjacent { node: 0, adjacent: 1 });
}

#[test]
fn test_from_connections_empty() {
    let list = AdjacencyList::from_connections(&[]).unwrap();
    assert_eq!(list.node_count(), 0);
    assert_eq!(list.connection_count(), 0);
}

#[test]
fn test_from_connections_rejects_max_destination() {
    let err = AdjacencyList::from_connections(&[(0, 1), (0, usize::MAX)]).unwrap_err();
    assert_eq!(
        err,
        AdjacencyError::NodeOutOfBound {
            node: usize::MAX,
            node_count: usize::MAX
        }
    );

    // the same raw value is fine once the node range is fixed
    let list = AdjacencyList::with_nodes(1, &[(0, usize::MAX)]).unwrap();
    assert_eq!(list.neighbors(0).unwrap(), &[usize::MAX]);
}

#[test]
fn test_with_nodes_rejects_source_out_of_range() {
    let err = AdjacencyList::with_nodes(2, &[(0, 1), (2, 0)]).unwrap_err();
    assert_eq!(err, AdjacencyError::NodeOutOfBound { node: 2, node_count: 2 });

    let list = AdjacencyList::with_nodes(5, &[(0, 4)]).unwrap();
    assert_eq!(list.node_count(), 5);
}

#[test]
fn test_accessors_report_bounds() {
    let list = AdjacencyList::from_connections(&[(0, 1)]).unwrap();
    assert_eq!(list.adjacent_count(1), Ok(0));
    assert_eq!(
        list.adjacent_count(2),
        Err(AdjacencyError::NodeOutOfBound { node: 2, node_count: 2 })
    );
    assert_eq!(
        list.adjacent(0, 1),
        Err(AdjacencyError::SlotOutOfBound { node: 0, slot: 1, len: 1 })
    );
    assert_eq!(list.adjacent(0, 0), Ok(1));
}

#[test]
fn test_add_adjacent_twice_is_rejected() {
    let mut list = AdjacencyList::new(2);
    list.add_adjacent(0, 1).unwrap();
    let err = list.add_adjacent(0, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateViolation);
    assert_eq!(list.adjacent_count(0), Ok(1));
    assert_eq!(list.connection_count(), 1);
}

#[test]
fn test_add_adjacent_allows_self_loops_and_foreign_values() {
    let mut list = AdjacencyList::new(1);
    list.add_adjacent(0, 0).unwrap();
    list.add_adjacent(0, 42).unwrap();
    assert_eq!(list.neighbors(0).unwrap(), &[0, 42]);
}

#[test]
fn test_add_node_returns_new_index() {
    let mut list = AdjacencyList::new(2);
    assert_eq!(list.add_node(), 2);
    assert_eq!(list.node_count(), 3);
    assert_eq!(list.adjacent_count(2), Ok(0));
}

#[test]
fn test_insert_node_shifts_without_relabeling() {
    let mut list = AdjacencyList::from_connections(&[(0, 1), (1, 0)]).unwrap();
    list.insert_node(1).unwrap();
    assert_eq!(list.node_count(), 3);
    assert_eq!(list.neighbors(0).unwrap(), &[1]);
    assert!(list.neighbors(1).unwrap().is_empty());
    assert_eq!(list.neighbors(2).unwrap(), &[0]);

    list.insert_node(3).unwrap();
    assert_eq!(list.node_count(), 4);

    let err = list.insert_node(5).unwrap_err();
    assert_eq!(err, AdjacencyError::NodeOutOfBound { node: 5, node_count: 4 });
    assert_eq!(list.node_count(), 4);
}

#[test]
fn test_swap_nodes() {
    let mut list = AdjacencyList::from_connections(&[(0, 2), (1, 3), (1, 4)]).unwrap();
    list.swap_nodes(0, 1).unwrap();
    assert_eq!(list.neighbors(0).unwrap(), &[3, 4]);
    assert_eq!(list.neighbors(1).unwrap(), &[2]);

    let before = list.clone();
    list.swap_nodes(1, 1).unwrap();
    assert_eq!(list, before);

    assert_eq!(list.swap_nodes(0, 5).unwrap_err().kind(), ErrorKind::OutOfBound);
    assert_eq!(list, before);
}

#[test]
fn test_remove_node_keeps_other_nodes_intact() {
    let mut list =
        AdjacencyList::from_connections(&[(0, 3), (1, 2), (1, 0), (2, 1), (3, 3)]).unwrap();
    list.remove_node(1).unwrap();
    assert_eq!(list.node_count(), 3);
    assert_eq!(list.connection_count(), 3);
    assert_eq!(list.neighbors(0).unwrap(), &[3]);
    assert_eq!(list.neighbors(1).unwrap(), &[1]);
    assert_eq!(list.neighbors(2).unwrap(), &[3]);
    assert_eq!(list.connection_count(), degree_sum(&list));

    assert_eq!(list.remove_node(3).unwrap_err().kind(), ErrorKind::OutOfBound);
}

#[test]
fn test_insert_adjacent_positions() {
    let mut list = AdjacencyList::from_connections(&[(0, 1), (0, 3)]).unwrap();
    list.insert_adjacent(0, 2, 1).unwrap();
    list.insert_adjacent(0, 0, 0).unwrap();
    list.insert_adjacent(0, 4, 4).unwrap();
    assert_eq!(list.neighbors(0).unwrap(), &[0, 1, 2, 3, 4]);
    assert_eq!(list.connection_count(), 5);

    assert_eq!(
        list.insert_adjacent(0, 9, 6),
        Err(AdjacencyError::SlotOutOfBound { node: 0, slot: 6, len: 5 })
    );
    assert_eq!(
        list.insert_adjacent(0, 3, 0),
        Err(AdjacencyError::DuplicateAdjacent { node: 0, adjacent: 3 })
    );
    assert_eq!(list.connection_count(), 5);
}

#[test]
fn test_update_adjacent() {
    let mut list = AdjacencyList::from_connections(&[(0, 1), (0, 2)]).unwrap();

    // same value: silently accepted
    list.update_adjacent(0, 1, 0).unwrap();
    assert_eq!(list.neighbors(0).unwrap(), &[1, 2]);

    assert_eq!(
        list.update_adjacent(0, 2, 0),
        Err(AdjacencyError::DuplicateAdjacent { node: 0, adjacent: 2 })
    );
    list.update_adjacent(0, 7, 0).unwrap();
    assert_eq!(list.neighbors(0).unwrap(), &[7, 2]);
    assert_eq!(list.update_adjacent(0, 8, 2).unwrap_err().kind(), ErrorKind::OutOfBound);
    assert_eq!(list.connection_count(), 2);
}

#[test]
fn test_replace_adjacent() {
    let mut list = AdjacencyList::from_connections(&[(0, 4), (0, 5), (0, 6)]).unwrap();
    assert_eq!(list.replace_adjacent(0, 5, 9), Ok(1));
    assert_eq!(list.neighbors(0).unwrap(), &[4, 9, 6]);

    assert_eq!(
        list.replace_adjacent(0, 5, 1),
        Err(AdjacencyError::AdjacentNotFound { node: 0, adjacent: 5 })
    );
    assert_eq!(
        list.replace_adjacent(0, 4, 6),
        Err(AdjacencyError::DuplicateAdjacent { node: 0, adjacent: 6 })
    );
    assert_eq!(
        list.replace_adjacent(0, 4, 4),
        Err(AdjacencyError::DuplicateAdjacent { node: 0, adjacent: 4 })
    );
    assert_eq!(list.neighbors(0).unwrap(), &[4, 9, 6]);
}

#[test]
fn test_remove_adjacent() {
    let mut list = AdjacencyList::from_connections(&[(0, 4), (0, 5), (1, 0)]).unwrap();
    assert_eq!(list.remove_adjacent(0, 0), Ok(4));
    assert_eq!(list.neighbors(0).unwrap(), &[5]);
    assert_eq!(list.connection_count(), 2);
    assert_eq!(
        list.remove_adjacent(0, 1),
        Err(AdjacencyError::SlotOutOfBound { node: 0, slot: 1, len: 1 })
    );
    assert_eq!(list.remove_adjacent(2, 0).unwrap_err().kind(), ErrorKind::OutOfBound);
}

#[test]
fn test_clear_adjacents() {
    let mut list = AdjacencyList::from_connections(&[(0, 1), (0, 2), (1, 0)]).unwrap();
    assert_eq!(list.clear_adjacents(0), Ok(2));
    assert_eq!(list.connection_count(), 1);
    assert_eq!(list.adjacent_count(0), Ok(0));
}

#[test]
fn test_contract_helpers() {
    let list = AdjacencyList::from_connections(&[(0, 3), (0, 1), (1, 2)]).unwrap();
    assert_eq!(list.position_of(0, 1), Ok(Some(1)));
    assert_eq!(list.position_of(1, 1), Ok(None));
    assert_eq!(list.contains_adjacent(1, 2), Ok(true));
    assert_eq!(list.adjacents(0).unwrap().collect::<Vec<_>>(), vec![3, 1]);
    assert_eq!(list.connections().collect::<Vec<_>>(), vec![(0, 3), (0, 1), (1, 2)]);
}

#[test]
fn test_from_adjacency_through_trait_object() {
    let source = AdjacencyList::from_connections(&[(0, 1), (2, 0), (2, 1)]).unwrap();
    let erased: &dyn Adjacency = &source;
    let copy = AdjacencyList::from_adjacency(erased).unwrap();
    assert_eq!(copy, source);
}

#[test]
fn test_assign_from_replaces_contents() {
    let source = AdjacencyList::from_connections(&[(1, 0)]).unwrap();
    let mut target = AdjacencyList::new(7);
    target.add_adjacent(3, 3).unwrap();
    target.assign_from(&source).unwrap();
    assert_eq!(target, source);
}

#[test]
fn test_edit_sequence_from_compact_snapshot() {
    // every node i < 10 points at 10, which is left out of the node range;
    // from_connections on the same pairs would give 11 nodes
    let pairs: Vec<(usize, usize)> = (0..10).map(|i| (i, 10)).collect();
    let compact = crate::graph::CsrAdjacency::with_nodes(10, &pairs).unwrap();
    let mut list = AdjacencyList::from_adjacency(&compact).unwrap();
    assert_eq!(list.node_count(), 10);

    // node i gains every adjacent in i..9
    for i in 0..10 {
        for j in i..9 {
            list.add_adjacent(i, j).unwrap();
        }
    }

    // drop odd nodes, back to front
    for i in (1..10).step_by(2).rev() {
        list.remove_node(i).unwrap();
    }
    assert_eq!(list.node_count(), 5);

    // drop odd adjacents
    for node in 0..list.node_count() {
        for slot in (0..list.adjacent_count(node).unwrap()).rev() {
            if list.adjacent(node, slot).unwrap() % 2 != 0 {
                list.remove_adjacent(node, slot).unwrap();
            }
        }
    }

    // halve what is left
    for node in 0..list.node_count() {
        for slot in 0..list.adjacent_count(node).unwrap() {
            let value = list.adjacent(node, slot).unwrap();
            list.update_adjacent(node, value / 2, slot).unwrap();
        }
    }

    let frozen = crate::graph::CsrAdjacency::from_adjacency(&list).unwrap();
    assert_eq!(frozen.node_count(), 5);
    assert_eq!(frozen.connection_count(), degree_sum(&list));
    for (node, adjacent) in frozen.connections() {
        assert!(node <= adjacent);
        assert!(adjacent <= 5);
    }
}
