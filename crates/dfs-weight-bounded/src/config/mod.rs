//! Configuration for traversal limits and multi-root execution.
//!
//! `DfsConfig` tunes how the driver runs, never what it computes: with the
//! default node budget (unbounded) every setting produces identical rows.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Row estimate handed to the planner when the arguments carry no columns.
pub const DEFAULT_ROW_ESTIMATE: u32 = 1024;

/// Minimum number of roots before parallel fan-out kicks in.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Configuration for weight-bounded DFS.
///
/// Every entry point that accepts a config calls `validate()` before doing
/// any work, so invalid configurations fail fast with
/// `GraphError::InvalidConfig`.
///
/// # Example
/// ```
/// use dfs_weight_bounded::config::DfsConfig;
///
/// let config = DfsConfig::default().parallel_roots(true).max_nodes_per_root(10_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DfsConfig {
    /// Maximum nodes discovered for a single root (None = unlimited).
    /// Exceeding it aborts the whole call with `TraversalBudgetExceeded`.
    pub max_nodes_per_root: Option<usize>,

    /// Fan per-root traversals out across the rayon thread pool.
    /// Output order is unchanged, and so is the error reported when several
    /// roots fail: the earliest in input order wins.
    pub parallel_roots: bool,

    /// Minimum root count before `parallel_roots` takes effect.
    pub parallel_threshold: usize,

    /// Planner hint used when no argument columns are available.
    pub default_row_estimate: u32,
}

impl Default for DfsConfig {
    fn default() -> Self {
        Self {
            max_nodes_per_root: None,
            parallel_roots: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            default_row_estimate: DEFAULT_ROW_ESTIMATE,
        }
    }
}

impl DfsConfig {
    /// Builder: set the per-root node budget.
    #[must_use]
    pub fn max_nodes_per_root(mut self, nodes: usize) -> Self {
        self.max_nodes_per_root = Some(nodes);
        self
    }

    /// Builder: remove the per-root node budget.
    #[must_use]
    pub fn unlimited_nodes(mut self) -> Self {
        self.max_nodes_per_root = None;
        self
    }

    /// Builder: enable or disable parallel fan-out across roots.
    #[must_use]
    pub fn parallel_roots(mut self, enabled: bool) -> Self {
        self.parallel_roots = enabled;
        self
    }

    /// Builder: set the parallel fan-out threshold.
    #[must_use]
    pub fn parallel_threshold(mut self, roots: usize) -> Self {
        self.parallel_threshold = roots;
        self
    }

    /// Builder: set the fallback planner row estimate.
    #[must_use]
    pub fn default_row_estimate(mut self, rows: u32) -> Self {
        self.default_row_estimate = rows;
        self
    }

    /// Whether `root_count` roots should be traversed in parallel.
    #[inline]
    pub fn use_parallel(&self, root_count: usize) -> bool {
        self.parallel_roots && root_count >= self.parallel_threshold
    }

    /// Validate configuration, returning GraphError if invalid.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::InvalidConfig` if:
    /// - `max_nodes_per_root` is `Some(0)` (the root itself is always discovered)
    /// - `parallel_threshold` is 0
    /// - `default_row_estimate` is 0
    pub fn validate(&self) -> GraphResult<()> {
        if self.max_nodes_per_root == Some(0) {
            return Err(GraphError::InvalidConfig(
                "max_nodes_per_root must be >= 1 when set".to_string(),
            ));
        }

        if self.parallel_threshold == 0 {
            return Err(GraphError::InvalidConfig(
                "parallel_threshold must be >= 1".to_string(),
            ));
        }

        if self.default_row_estimate == 0 {
            return Err(GraphError::InvalidConfig(
                "default_row_estimate must be >= 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Parse and validate a configuration from TOML text.
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_toml_str(text: &str) -> GraphResult<Self> {
        let config: DfsConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a TOML file.
    pub fn from_file(path: &Path) -> GraphResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded DFS config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests;
