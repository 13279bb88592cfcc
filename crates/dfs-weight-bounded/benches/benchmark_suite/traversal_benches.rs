//! Index construction, traversal and forest benchmarks.

use criterion::{black_box, BenchmarkId, Criterion, Throughput};

use dfs_weight_bounded::forest::run_on_index;
use dfs_weight_bounded::{BoundedDfsIterator, DfsConfig, EdgeColumns, GraphIndex, RootColumns};

use super::config;
use super::generators::{generate_chain, generate_sparse_edges, pick_roots};

/// Benchmark hash-grouped index construction.
pub fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for &edge_count in config::EDGE_COUNTS {
        let data = generate_sparse_edges(edge_count, config::AVG_OUT_DEGREE, config::MAX_EDGE_WEIGHT);
        let columns = EdgeColumns::new(&data.sources, &data.dests, &data.weights);

        group.throughput(Throughput::Elements(edge_count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(edge_count), &columns, |b, columns| {
            b.iter(|| GraphIndex::build(black_box(columns)))
        });
    }

    group.finish();
}

/// Benchmark one root over graphs of increasing size.
pub fn bench_single_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_root_dfs");

    for &edge_count in config::EDGE_COUNTS {
        let data = generate_sparse_edges(edge_count, config::AVG_OUT_DEGREE, config::MAX_EDGE_WEIGHT);
        let Ok(graph) = GraphIndex::build(&EdgeColumns::new(&data.sources, &data.dests, &data.weights))
        else {
            continue;
        };
        let root = data.sources[0];

        group.bench_with_input(BenchmarkId::from_parameter(edge_count), &graph, |b, graph| {
            b.iter(|| BoundedDfsIterator::new(black_box(graph), root, config::ROOT_BUDGET).count())
        });
    }

    group.finish();
}

/// Benchmark a deep chain (iterative traversal, no recursion).
pub fn bench_deep_chain(c: &mut Criterion) {
    let data = generate_chain(config::CHAIN_LENGTH);
    let Ok(graph) = GraphIndex::build(&EdgeColumns::new(&data.sources, &data.dests, &data.weights))
    else {
        return;
    };

    c.bench_function("deep_chain_dfs", |b| {
        b.iter(|| BoundedDfsIterator::new(black_box(&graph), 0, u32::MAX).count())
    });
}

/// Benchmark the multi-root driver, sequential vs parallel.
pub fn bench_forest(c: &mut Criterion) {
    let mut group = c.benchmark_group("forest");

    let data = generate_sparse_edges(100_000, config::AVG_OUT_DEGREE, config::MAX_EDGE_WEIGHT);
    let Ok(graph) = GraphIndex::build(&EdgeColumns::new(&data.sources, &data.dests, &data.weights))
    else {
        return;
    };

    for &root_count in config::ROOT_COUNTS {
        let root_ids = pick_roots(&data, root_count);
        let budgets = vec![config::ROOT_BUDGET; root_ids.len()];
        let roots = RootColumns::new(&root_ids, &budgets);

        let sequential = DfsConfig::default();
        let parallel = DfsConfig::default().parallel_roots(true).parallel_threshold(1);

        group.bench_with_input(BenchmarkId::new("sequential", root_count), &roots, |b, roots| {
            b.iter(|| run_on_index(black_box(&graph), roots, &sequential))
        });
        group.bench_with_input(BenchmarkId::new("parallel", root_count), &roots, |b, roots| {
            b.iter(|| run_on_index(black_box(&graph), roots, &parallel))
        });
    }

    group.finish();
}
