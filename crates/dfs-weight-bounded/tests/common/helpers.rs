//! Reference computations used to check traversal output.

#![allow(dead_code)]

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use dfs_weight_bounded::ForestRow;

/// Minimum path weight from `root` to every node, computed with Dijkstra in
/// u64 so sums never wrap.
pub fn min_distances(
    sources: &[u32],
    dests: &[u32],
    weights: &[u32],
    root: u32,
) -> HashMap<u32, u64> {
    let mut adjacency: HashMap<u32, Vec<(u32, u64)>> = HashMap::new();
    for ((&s, &d), &w) in sources.iter().zip(dests).zip(weights) {
        adjacency.entry(s).or_default().push((d, u64::from(w)));
    }

    let mut dist: HashMap<u32, u64> = HashMap::new();
    let mut heap = BinaryHeap::new();
    dist.insert(root, 0);
    heap.push(Reverse((0u64, root)));

    while let Some(Reverse((d, node))) = heap.pop() {
        if dist.get(&node).is_some_and(|&best| d > best) {
            continue;
        }
        for &(next, w) in adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[]) {
            let candidate = d + w;
            if dist.get(&next).map_or(true, |&best| candidate < best) {
                dist.insert(next, candidate);
                heap.push(Reverse((candidate, next)));
            }
        }
    }
    dist
}

/// Split forest rows into per-root groups, checking grouping is contiguous.
pub fn group_by_root(rows: &[ForestRow]) -> Vec<(u32, Vec<ForestRow>)> {
    let mut groups: Vec<(u32, Vec<ForestRow>)> = Vec::new();
    for row in rows {
        let start_new = row.parent.is_none() && row.node == row.root;
        if start_new || groups.is_empty() {
            groups.push((row.root, Vec::new()));
        }
        if let Some((_, group)) = groups.last_mut() {
            group.push(*row);
        }
    }
    groups
}

/// Assert a single root's rows form a tree with parents before children.
pub fn assert_tree_shape(root: u32, rows: &[ForestRow]) {
    assert!(!rows.is_empty(), "root {} produced no rows", root);
    assert_eq!(rows[0].node, root, "first row must be the root");
    assert_eq!(rows[0].parent, None);

    let mut seen = HashSet::new();
    for row in rows {
        assert_eq!(row.root, root);
        if let Some(parent) = row.parent {
            assert!(seen.contains(&parent), "parent {} after child {}", parent, row.node);
        } else {
            assert_eq!(row.node, root, "only the root may lack a parent");
        }
        assert!(seen.insert(row.node), "node {} discovered twice for root {}", row.node, root);
    }
}
