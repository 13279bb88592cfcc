//! Benchmark configuration constants.

/// Edge counts for generated graphs
pub const EDGE_COUNTS: &[usize] = &[1_000, 10_000, 100_000];

/// Average out-degree of generated graphs
pub const AVG_OUT_DEGREE: usize = 4;

/// Root counts for forest benchmarks
pub const ROOT_COUNTS: &[usize] = &[16, 256];

/// Per-root weight budget used in forest benchmarks
pub const ROOT_BUDGET: u32 = 40;

/// Max weight of a single generated edge
pub const MAX_EDGE_WEIGHT: u32 = 10;

/// Length of the deep chain benchmark
pub const CHAIN_LENGTH: u32 = 100_000;
