//! Graph representation for weight-bounded traversal.
//!
//! Edges arrive as three parallel `u32` columns and are grouped by source id
//! into a hash-keyed adjacency index. Node ids are opaque and may be sparse,
//! so nothing here is indexed directly by node id.

mod index;
mod types;


pub use self::index::{mean_out_degree, GraphIndex};
pub use self::types::{Edge, EdgeColumns, NodeId, Weight};
