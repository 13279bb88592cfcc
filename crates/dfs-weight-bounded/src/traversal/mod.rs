//! Graph traversal algorithms.
//!
//! # Algorithms
//!
//! - **Weight-bounded DFS**: iterative depth-first discovery from one root,
//!   following an edge only while the accumulated path weight stays within
//!   the root's inclusive budget.
//!
//! # Example
//!
//! ```rust
//! use dfs_weight_bounded::graph::{EdgeColumns, GraphIndex};
//! use dfs_weight_bounded::traversal::BoundedDfsIterator;
//!
//! let graph = GraphIndex::build(&EdgeColumns::new(&[1, 2], &[2, 3], &[1, 1])).unwrap();
//! let nodes: Vec<u32> = BoundedDfsIterator::new(&graph, 1, 1).map(|r| r.node).collect();
//! assert_eq!(nodes, vec![1, 2]);
//! ```

pub mod dfs;

pub use dfs::{
    dfs_weight_bounded, reachable_nodes, BoundedDfsIterator, DfsResult, DiscoveryRecord,
};
