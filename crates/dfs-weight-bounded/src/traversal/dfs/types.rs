//! Type definitions for weight-bounded DFS.

use crate::graph::{NodeId, Weight};

/// One node's membership in a root's DFS tree.
///
/// `parent` is `None` only for the root itself. `path_weight` is the
/// accumulated weight along the path that discovered the node, which is not
/// necessarily the cheapest path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiscoveryRecord {
    pub node: NodeId,
    pub parent: Option<NodeId>,
    pub path_weight: Weight,
}

impl DiscoveryRecord {
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Pending stack entry: a node reached via `parent` at `path_weight`.
#[derive(Debug, Clone, Copy)]
pub(super) struct Frame {
    pub node: NodeId,
    pub parent: Option<NodeId>,
    pub path_weight: Weight,
}
