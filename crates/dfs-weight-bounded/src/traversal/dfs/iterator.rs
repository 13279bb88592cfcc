//! DFS iterator for lazy traversal.
//!
//! Yields discovery records one at a time without building a full result.

use std::collections::HashSet;

use crate::graph::{GraphIndex, NodeId, Weight};

use super::types::{DiscoveryRecord, Frame};

/// Lazy weight-bounded DFS from a single root.
///
/// Owns its stack and visited set, so every iterator is an independent
/// traversal; the shared `GraphIndex` is only read. The root is always
/// yielded first, whatever its budget.
pub struct BoundedDfsIterator<'a> {
    graph: &'a GraphIndex,
    stack: Vec<Frame>,
    visited: HashSet<NodeId>,
    max_weight: Weight,
}

impl<'a> BoundedDfsIterator<'a> {
    /// Create a new iterator rooted at `root` with inclusive budget `max_weight`.
    pub fn new(graph: &'a GraphIndex, root: NodeId, max_weight: Weight) -> Self {
        Self {
            graph,
            stack: vec![Frame {
                node: root,
                parent: None,
                path_weight: 0,
            }],
            visited: HashSet::new(),
            max_weight,
        }
    }

    /// Number of nodes discovered so far.
    #[inline]
    pub fn discovered_count(&self) -> usize {
        self.visited.len()
    }
}

impl Iterator for BoundedDfsIterator<'_> {
    type Item = DiscoveryRecord;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.pop()?;

            // Reached earlier through another path; first discovery wins
            if !self.visited.insert(frame.node) {
                continue;
            }

            // Reverse push so the first listed edge is popped first.
            // Visited destinations are still pushed and dropped on pop.
            for &(dest, weight) in self.graph.adjacency_of(frame.node).iter().rev() {
                // Overflow means the path is over any finite budget
                let Some(candidate) = frame.path_weight.checked_add(weight) else {
                    continue;
                };
                if candidate <= self.max_weight {
                    self.stack.push(Frame {
                        node: dest,
                        parent: Some(frame.node),
                        path_weight: candidate,
                    });
                }
            }

            return Some(DiscoveryRecord {
                node: frame.node,
                parent: frame.parent,
                path_weight: frame.path_weight,
            });
        }
    }
}

impl std::iter::FusedIterator for BoundedDfsIterator<'_> {}
