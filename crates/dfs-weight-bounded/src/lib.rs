//! Weight-bounded, multi-root DFS over sparse `u32`-keyed graphs.
//!
//! Given flat edge columns and a list of `(root, max_weight)` pairs, computes
//! for every root independently the DFS tree of nodes reachable while the
//! accumulated path weight stays within that root's inclusive budget. The
//! result is a forest expressed as `(root, node, parent)` rows.
//!
//! # Architecture
//!
//! - **error**: `GraphError` / `GraphResult`
//! - **config**: `DfsConfig` traversal and execution tuning
//! - **graph**: edge columns and the hash-grouped `GraphIndex`
//! - **traversal**: iterative weight-bounded DFS from a single root
//! - **forest**: multi-root driver producing `ForestRow`s
//! - **table_function**: query-engine boundary (name, schema, arguments)
//!
//! # Example
//!
//! ```
//! use dfs_weight_bounded::forest::{run, RootColumns};
//! use dfs_weight_bounded::graph::EdgeColumns;
//! use dfs_weight_bounded::GraphResult;
//!
//! fn example() -> GraphResult<()> {
//!     let edges = EdgeColumns::new(&[1, 2], &[2, 1], &[1, 1]);
//!     let rows = run(&edges, &RootColumns::new(&[1], &[100]))?;
//!     assert_eq!(rows.len(), 2);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod config;
pub mod error;
pub mod forest;
pub mod graph;
pub mod table_function;
pub mod traversal;

// Re-exports for convenience
pub use config::DfsConfig;
pub use error::{GraphError, GraphResult};
pub use forest::{run, run_with_config, ForestRow, RootColumns, RootSpec};
pub use graph::{Edge, EdgeColumns, GraphIndex, NodeId, Weight};
pub use table_function::{DfsWeightBounded, StaticTableFunction};
pub use traversal::{dfs_weight_bounded, BoundedDfsIterator, DfsResult, DiscoveryRecord};
