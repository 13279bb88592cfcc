//! Collecting forms of the weight-bounded DFS.

use crate::config::DfsConfig;
use crate::error::{GraphError, GraphResult};
use crate::graph::{GraphIndex, NodeId, Weight};

use super::iterator::BoundedDfsIterator;
use super::result::DfsResult;
use super::types::DiscoveryRecord;

/// Drain one root's traversal into a vector, enforcing an optional node budget.
///
/// # Errors
/// * `GraphError::InvalidConfig` - `max_nodes` is `Some(0)`; the root itself
///   is always discovered
/// * `GraphError::TraversalBudgetExceeded` - more than `max_nodes` nodes
///   would be discovered
pub fn collect_discoveries(
    graph: &GraphIndex,
    root: NodeId,
    max_weight: Weight,
    max_nodes: Option<usize>,
) -> GraphResult<Vec<DiscoveryRecord>> {
    let mut iter = BoundedDfsIterator::new(graph, root, max_weight);

    let discovered: Vec<DiscoveryRecord> = match max_nodes {
        None => iter.collect(),
        Some(0) => {
            return Err(GraphError::InvalidConfig(
                "max_nodes_per_root must be >= 1 when set".to_string(),
            ));
        }
        Some(limit) => {
            let mut out = Vec::new();
            while let Some(record) = iter.next() {
                if iter.discovered_count() > limit {
                    tracing::warn!(root, limit, "DFS node budget exhausted");
                    return Err(GraphError::TraversalBudgetExceeded { root, limit });
                }
                out.push(record);
            }
            out
        }
    };

    tracing::trace!(root, max_weight, nodes = discovered.len(), "DFS complete");
    Ok(discovered)
}

/// Perform a weight-bounded DFS from `root` and collect the result.
///
/// # Arguments
/// * `graph` - Shared adjacency index
/// * `root` - Starting node (always present in the result)
/// * `max_weight` - Inclusive bound on accumulated path weight
/// * `config` - Validated first; only `max_nodes_per_root` is consulted
///
/// # Example
///
/// ```rust
/// use dfs_weight_bounded::config::DfsConfig;
/// use dfs_weight_bounded::graph::{EdgeColumns, GraphIndex};
/// use dfs_weight_bounded::traversal::dfs_weight_bounded;
///
/// let graph = GraphIndex::build(&EdgeColumns::new(&[1, 2], &[2, 3], &[2, 3])).unwrap();
/// let result = dfs_weight_bounded(&graph, 1, 5, &DfsConfig::default()).unwrap();
/// assert_eq!(result.path_to(3), Some(vec![1, 2, 3]));
/// assert_eq!(result.path_weight(3), Some(5));
/// ```
pub fn dfs_weight_bounded(
    graph: &GraphIndex,
    root: NodeId,
    max_weight: Weight,
    config: &DfsConfig,
) -> GraphResult<DfsResult> {
    config.validate()?;
    let discovered = collect_discoveries(graph, root, max_weight, config.max_nodes_per_root)?;
    Ok(DfsResult::from_records(root, discovered))
}

/// Node ids reachable from `root` within `max_weight`, in DFS pre-order.
pub fn reachable_nodes(graph: &GraphIndex, root: NodeId, max_weight: Weight) -> Vec<NodeId> {
    BoundedDfsIterator::new(graph, root, max_weight)
        .map(|record| record.node)
        .collect()
}
