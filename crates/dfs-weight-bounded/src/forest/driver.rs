//! Multi-root execution, sequential or fanned out with rayon.

use rayon::prelude::*;

use crate::config::DfsConfig;
use crate::error::GraphResult;
use crate::graph::{EdgeColumns, GraphIndex};
use crate::traversal::dfs::collect_discoveries;

use super::types::{ForestRow, RootColumns, RootSpec};

/// Compute the reachability forest with the default configuration.
///
/// # Errors
/// * `GraphError::InputShape` - edge or root columns are not parallel
///
/// # Example
///
/// ```rust
/// use dfs_weight_bounded::forest::{run, ForestRow, RootColumns};
/// use dfs_weight_bounded::graph::EdgeColumns;
///
/// let edges = EdgeColumns::new(&[1, 2], &[2, 3], &[1, 1]);
/// let rows = run(&edges, &RootColumns::new(&[1, 3], &[2, 0])).unwrap();
///
/// let root3: Vec<&ForestRow> = rows.iter().filter(|r| r.root == 3).collect();
/// assert_eq!(root3.len(), 1);
/// assert_eq!(rows.len(), 4);
/// ```
pub fn run(edges: &EdgeColumns<'_>, roots: &RootColumns<'_>) -> GraphResult<Vec<ForestRow>> {
    run_with_config(edges, roots, &DfsConfig::default())
}

/// Compute the reachability forest.
///
/// All shape checks happen before the index is built, so a failed call does
/// no traversal work.
pub fn run_with_config(
    edges: &EdgeColumns<'_>,
    roots: &RootColumns<'_>,
    config: &DfsConfig,
) -> GraphResult<Vec<ForestRow>> {
    edges.validate()?;
    roots.validate()?;
    config.validate()?;

    let graph = GraphIndex::build(edges)?;
    run_on_index(&graph, roots, config)
}

/// Run every root against an already-built index.
///
/// Output is grouped by root in input order regardless of
/// `config.parallel_roots`. On failure the reported error is the one of the
/// earliest failing root in input order, in both modes.
pub fn run_on_index(
    graph: &GraphIndex,
    roots: &RootColumns<'_>,
    config: &DfsConfig,
) -> GraphResult<Vec<ForestRow>> {
    roots.validate()?;
    config.validate()?;

    let specs: Vec<RootSpec> = roots.iter().collect();
    let parallel = config.use_parallel(specs.len());

    let rows = if parallel {
        let per_root: Vec<GraphResult<Vec<ForestRow>>> = specs
            .par_iter()
            .map(|spec| root_rows(graph, spec, config))
            .collect();
        let mut rows = Vec::new();
        for result in per_root {
            rows.extend(result?);
        }
        rows
    } else {
        let mut rows = Vec::new();
        for spec in &specs {
            rows.extend(root_rows(graph, spec, config)?);
        }
        rows
    };

    tracing::debug!(
        roots = specs.len(),
        rows = rows.len(),
        parallel,
        "Reachability forest complete"
    );

    Ok(rows)
}

fn root_rows(graph: &GraphIndex, spec: &RootSpec, config: &DfsConfig) -> GraphResult<Vec<ForestRow>> {
    let discovered =
        collect_discoveries(graph, spec.root, spec.max_weight, config.max_nodes_per_root)?;
    Ok(discovered
        .iter()
        .map(|record| ForestRow::from_discovery(spec.root, record))
        .collect())
}
