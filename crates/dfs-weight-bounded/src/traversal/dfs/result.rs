//! DFS traversal result type.

use std::collections::HashMap;

use crate::graph::{NodeId, Weight};

use super::types::DiscoveryRecord;

/// Result of a single-root weight-bounded DFS.
#[derive(Debug, Clone)]
pub struct DfsResult {
    /// Root the traversal started from.
    pub root: NodeId,

    /// Discovery records in DFS pre-order (root first).
    pub discovered: Vec<DiscoveryRecord>,

    /// Position of each discovered node in `discovered`.
    positions: HashMap<NodeId, usize>,
}

impl DfsResult {
    /// Build a result from records already in discovery order.
    #[must_use]
    pub fn from_records(root: NodeId, discovered: Vec<DiscoveryRecord>) -> Self {
        let positions = discovered
            .iter()
            .enumerate()
            .map(|(pos, record)| (record.node, pos))
            .collect();
        Self {
            root,
            discovered,
            positions,
        }
    }

    /// Get total node count (root included).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.discovered.len()
    }

    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.positions.contains_key(&node)
    }

    /// Parent of `node` in the DFS tree.
    ///
    /// `None` if the node was not discovered, `Some(None)` for the root.
    #[must_use]
    pub fn parent_of(&self, node: NodeId) -> Option<Option<NodeId>> {
        self.record(node).map(|r| r.parent)
    }

    /// Accumulated weight along the discovering path.
    #[must_use]
    pub fn path_weight(&self, node: NodeId) -> Option<Weight> {
        self.record(node).map(|r| r.path_weight)
    }

    /// Reconstruct the tree path from the root to `target`.
    ///
    /// Returns None if target was not discovered.
    #[must_use]
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        let mut current = self.record(target)?;
        let mut path = vec![current.node];

        while let Some(parent) = current.parent {
            path.push(parent);
            current = self.record(parent)?;
        }

        path.reverse();
        Some(path)
    }

    /// Discovered node ids in DFS pre-order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.discovered.iter().map(|r| r.node)
    }

    fn record(&self, node: NodeId) -> Option<&DiscoveryRecord> {
        self.positions.get(&node).map(|&pos| &self.discovered[pos])
    }
}
