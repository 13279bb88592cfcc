//! Weight-bounded DFS from a single root.
//!
//! Explores the graph depth-first using an ITERATIVE approach (explicit stack).
//! NO RECURSION is used, so deep chains and adversarial graphs cannot exhaust
//! the call stack.
//!
//! # Ordering
//!
//! A node's outgoing edges are pushed in reverse input order, so the first
//! listed edge is explored first. Under diamonds the parent of a shared node
//! is the one reached through the earliest listed edge. Callers rebuilding
//! trees may rely on this.
//!
//! # Performance
//!
//! Uses `Vec<Frame>` as explicit stack and `HashSet` for O(1) visited lookup.
//! Each node is expanded at most once per root, bounding pushes by O(E).

mod iterator;
mod result;
mod traversal;
mod types;


pub use self::iterator::BoundedDfsIterator;
pub use self::result::DfsResult;
pub use self::traversal::{collect_discoveries, dfs_weight_bounded, reachable_nodes};
pub use self::types::DiscoveryRecord;
