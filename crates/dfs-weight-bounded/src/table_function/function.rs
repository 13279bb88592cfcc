//! The `__intrinsic_dfs_weight_bounded` table function.

use std::collections::HashSet;

use crate::config::DfsConfig;
use crate::error::{GraphError, GraphResult};
use crate::forest::{run_with_config, RootColumns};
use crate::graph::{mean_out_degree, EdgeColumns};

use super::args::ArgValue;
use super::schema::TableSchema;
use super::table::ReachabilityTable;
use super::StaticTableFunction;

/// Name the engine registers this function under.
pub const TABLE_NAME: &str = "__intrinsic_dfs_weight_bounded";

/// Positional argument names, in call order.
pub const ARGUMENT_NAMES: [&str; 5] = [
    "source_node_ids",
    "dest_node_ids",
    "edge_weights",
    "root_node_ids",
    "root_max_weights",
];

/// Source ids inspected when estimating the average out-degree.
pub const ESTIMATE_SAMPLE_SIZE: usize = 1024;

/// Weight-bounded DFS from a set of start nodes, each traversed independently.
///
/// Not meant to be called directly by end users; engine-side macros wrap it.
///
/// # Example
/// ```
/// use dfs_weight_bounded::table_function::{ArgValue, DfsWeightBounded, StaticTableFunction};
///
/// let function = DfsWeightBounded::default();
/// let table = function
///     .compute_table(&[
///         ArgValue::from(vec![1u32]),
///         ArgValue::from(vec![2u32]),
///         ArgValue::from(vec![5u32]),
///         ArgValue::from(vec![1u32]),
///         ArgValue::from(vec![5u32]),
///     ])
///     .unwrap();
/// assert_eq!(table.node_ids(), &[1, 2]);
/// assert_eq!(table.parent_node_ids(), &[None, Some(1)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DfsWeightBounded {
    config: DfsConfig,
}

impl DfsWeightBounded {
    /// Create the function with a validated configuration.
    pub fn new(config: DfsConfig) -> GraphResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DfsConfig {
        &self.config
    }

    /// Check arity and nullness.
    ///
    /// Returns `false` when every argument is null, meaning an empty result.
    fn check_arguments(arguments: &[ArgValue]) -> GraphResult<bool> {
        if arguments.len() != ARGUMENT_NAMES.len() {
            return Err(GraphError::ArgumentCount {
                expected: ARGUMENT_NAMES.len(),
                actual: arguments.len(),
            });
        }

        let nulls = arguments.iter().filter(|a| a.is_null()).count();
        if nulls == arguments.len() {
            return Ok(false);
        }
        if nulls > 0 {
            return Err(GraphError::MixedNullArguments);
        }
        Ok(true)
    }
}

impl StaticTableFunction for DfsWeightBounded {
    fn table_name(&self) -> &'static str {
        TABLE_NAME
    }

    fn create_schema(&self) -> TableSchema {
        ReachabilityTable::schema()
    }

    /// Roughly `roots * (1 + average out-degree)`.
    ///
    /// The out-degree is taken from the first [`ESTIMATE_SAMPLE_SIZE`]
    /// source ids only, so planning cost does not grow with the edge count.
    /// Falls back to `config.default_row_estimate` if the source or root
    /// column is unavailable.
    fn estimate_row_count(&self, arguments: &[ArgValue]) -> u32 {
        let fallback = self.config.default_row_estimate;

        let (Some(sample), Some(roots)) = (
            arguments.first().and_then(|a| a.uint_prefix(ESTIMATE_SAMPLE_SIZE)),
            arguments.get(3).and_then(|a| a.column_len()),
        ) else {
            return fallback;
        };

        let distinct_sources = sample.iter().collect::<HashSet<_>>().len();
        let avg_degree = mean_out_degree(sample.len(), distinct_sources);

        let estimate = roots.saturating_mul(avg_degree.saturating_add(1));
        u32::try_from(estimate).unwrap_or(u32::MAX)
    }

    fn compute_table(&self, arguments: &[ArgValue]) -> GraphResult<ReachabilityTable> {
        if !Self::check_arguments(arguments)? {
            return Ok(ReachabilityTable::default());
        }

        let mut columns = Vec::with_capacity(ARGUMENT_NAMES.len());
        for (index, (arg, name)) in arguments.iter().zip(ARGUMENT_NAMES).enumerate() {
            columns.push(arg.as_uint_column(index, name)?);
        }

        let edges = EdgeColumns::new(&columns[0], &columns[1], &columns[2]);
        let roots = RootColumns::new(&columns[3], &columns[4]);

        let rows = run_with_config(&edges, &roots, &self.config)?;
        Ok(ReachabilityTable::from_rows(&rows))
    }
}
