//! Multi-root driver.
//!
//! Builds the adjacency index once, then runs an independent weight-bounded
//! DFS per root and tags each discovery with its root. Rows are grouped by
//! root in input order, and within a root follow DFS pre-order, so every
//! parent row precedes its children.

mod driver;
mod types;


pub use self::driver::{run, run_on_index, run_with_config};
pub use self::types::{ForestRow, RootColumns, RootSpec};
