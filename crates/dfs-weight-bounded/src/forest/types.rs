//! Root specifications and forest output rows.

use crate::error::{GraphError, GraphResult};
use crate::graph::{NodeId, Weight};
use crate::traversal::DiscoveryRecord;

/// A start node with its inclusive weight budget.
///
/// The same node may appear in several specs with different budgets; each
/// is traversed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RootSpec {
    pub root: NodeId,
    pub max_weight: Weight,
}

impl RootSpec {
    #[inline]
    pub const fn new(root: NodeId, max_weight: Weight) -> Self {
        Self { root, max_weight }
    }
}

/// Borrowed root columns: `root_ids[i]` with budget `max_weights[i]`.
#[derive(Debug, Clone, Copy)]
pub struct RootColumns<'a> {
    pub root_ids: &'a [NodeId],
    pub max_weights: &'a [Weight],
}

impl<'a> RootColumns<'a> {
    pub fn new(root_ids: &'a [NodeId], max_weights: &'a [Weight]) -> Self {
        Self {
            root_ids,
            max_weights,
        }
    }

    /// Fail with `InputShape` unless both columns have equal length.
    pub fn validate(&self) -> GraphResult<()> {
        if self.root_ids.len() != self.max_weights.len() {
            return Err(GraphError::input_shape(&[
                ("root_node_ids", self.root_ids.len()),
                ("root_max_weights", self.max_weights.len()),
            ]));
        }
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.root_ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root_ids.is_empty()
    }

    /// Root specs in input order.
    pub fn iter(&self) -> impl Iterator<Item = RootSpec> + 'a {
        self.root_ids
            .iter()
            .zip(self.max_weights)
            .map(|(&root, &max_weight)| RootSpec::new(root, max_weight))
    }
}

/// One output row: `node` belongs to the DFS tree of `root`.
///
/// `parent` is `None` exactly for the row where `node == root`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ForestRow {
    pub root: NodeId,
    pub node: NodeId,
    pub parent: Option<NodeId>,
}

impl ForestRow {
    #[inline]
    pub fn from_discovery(root: NodeId, record: &DiscoveryRecord) -> Self {
        Self {
            root,
            node: record.node,
            parent: record.parent,
        }
    }
}
