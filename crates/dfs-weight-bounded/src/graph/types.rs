//! Node, edge and edge-column types.

use crate::error::{GraphError, GraphResult};

/// Opaque node identifier. No density or contiguity is assumed.
pub type NodeId = u32;

/// Non-negative edge weight. Zero is legal.
pub type Weight = u32;

/// A directed, weighted edge.
///
/// Parallel edges, self-loops and cycles are all permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: NodeId,
    pub dest: NodeId,
    pub weight: Weight,
}

impl Edge {
    #[inline]
    pub const fn new(source: NodeId, dest: NodeId, weight: Weight) -> Self {
        Self {
            source,
            dest,
            weight,
        }
    }
}

/// Borrowed edge columns: `source_ids[i] -> dest_ids[i]` with `weights[i]`.
#[derive(Debug, Clone, Copy)]
pub struct EdgeColumns<'a> {
    pub source_ids: &'a [NodeId],
    pub dest_ids: &'a [NodeId],
    pub weights: &'a [Weight],
}

impl<'a> EdgeColumns<'a> {
    pub fn new(source_ids: &'a [NodeId], dest_ids: &'a [NodeId], weights: &'a [Weight]) -> Self {
        Self {
            source_ids,
            dest_ids,
            weights,
        }
    }

    /// Fail with `InputShape` unless all three columns have equal length.
    pub fn validate(&self) -> GraphResult<()> {
        let n = self.source_ids.len();
        if self.dest_ids.len() != n || self.weights.len() != n {
            return Err(GraphError::input_shape(&[
                ("source_node_ids", n),
                ("dest_node_ids", self.dest_ids.len()),
                ("edge_weights", self.weights.len()),
            ]));
        }
        Ok(())
    }

    /// Number of edges (length of the source column).
    #[inline]
    pub fn len(&self) -> usize {
        self.source_ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.source_ids.is_empty()
    }

    /// Iterate edges in input order.
    ///
    /// Zips the columns, so callers should `validate()` first.
    pub fn iter(&self) -> impl Iterator<Item = Edge> + 'a {
        self.source_ids
            .iter()
            .zip(self.dest_ids)
            .zip(self.weights)
            .map(|((&source, &dest), &weight)| Edge::new(source, dest, weight))
    }
}
