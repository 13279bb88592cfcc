//! Hash-grouped adjacency index.

use std::collections::HashMap;

use super::types::{Edge, EdgeColumns, NodeId, Weight};
use crate::error::GraphResult;

/// Read-only adjacency index keyed by source node id.
///
/// For every source id, `adjacency_of` returns exactly the input edges with
/// that source, in input order. Built once per call and shared by every root
/// traversal; it is never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct GraphIndex {
    adjacency: HashMap<NodeId, Vec<(NodeId, Weight)>>,
    edge_count: usize,
}

impl GraphIndex {
    /// Build the index from parallel edge columns.
    ///
    /// # Errors
    /// * `GraphError::InputShape` - the three columns differ in length
    ///
    /// # Example
    /// ```
    /// use dfs_weight_bounded::graph::{EdgeColumns, GraphIndex};
    ///
    /// let index = GraphIndex::build(&EdgeColumns::new(&[1, 1], &[2, 3], &[5, 7])).unwrap();
    /// assert_eq!(index.adjacency_of(1), &[(2, 5), (3, 7)]);
    /// assert!(index.adjacency_of(42).is_empty());
    /// ```
    pub fn build(columns: &EdgeColumns<'_>) -> GraphResult<Self> {
        columns.validate()?;
        let index = Self::from_edges(columns.iter());

        tracing::debug!(
            edges = index.edge_count,
            sources = index.adjacency.len(),
            avg_out_degree = index.average_out_degree(),
            "Built graph index"
        );

        Ok(index)
    }

    /// Build the index from already-paired edges. Infallible.
    ///
    /// Grouping is stable: edges sharing a source keep their relative order.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut adjacency: HashMap<NodeId, Vec<(NodeId, Weight)>> = HashMap::new();
        let mut edge_count = 0usize;

        for edge in edges {
            adjacency
                .entry(edge.source)
                .or_default()
                .push((edge.dest, edge.weight));
            edge_count += 1;
        }

        Self {
            adjacency,
            edge_count,
        }
    }

    /// Outgoing `(dest, weight)` pairs of `node`, in input order.
    ///
    /// Returns an empty slice for nodes with no outgoing edges.
    #[inline]
    pub fn adjacency_of(&self, node: NodeId) -> &[(NodeId, Weight)] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of edges indexed.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of distinct source ids.
    #[inline]
    pub fn source_count(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }

    /// Mean out-degree over nodes that have at least one outgoing edge,
    /// rounded up.
    pub fn average_out_degree(&self) -> usize {
        mean_out_degree(self.edge_count, self.adjacency.len())
    }
}

/// `ceil(edge_count / source_count)`, or 0 when there are no sources.
///
/// Shared by the index and the planner row estimate.
#[inline]
pub fn mean_out_degree(edge_count: usize, source_count: usize) -> usize {
    if source_count == 0 {
        return 0;
    }
    edge_count.div_ceil(source_count)
}
