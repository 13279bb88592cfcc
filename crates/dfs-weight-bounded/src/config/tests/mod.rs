//! Tests for DfsConfig.

use std::io::Write;

use crate::config::{DfsConfig, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_ROW_ESTIMATE};
use crate::error::GraphError;

#[test]
fn test_dfs_config_default_values() {
    let config = DfsConfig::default();
    assert_eq!(config.max_nodes_per_root, None);
    assert!(!config.parallel_roots);
    assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    assert_eq!(config.default_row_estimate, DEFAULT_ROW_ESTIMATE);
    assert!(config.validate().is_ok());
}

#[test]
fn test_builders_chain() {
    let config = DfsConfig::default()
        .max_nodes_per_root(50)
        .parallel_roots(true)
        .parallel_threshold(4)
        .default_row_estimate(10);
    assert_eq!(config.max_nodes_per_root, Some(50));
    assert!(config.parallel_roots);
    assert_eq!(config.parallel_threshold, 4);
    assert_eq!(config.default_row_estimate, 10);

    let config = config.unlimited_nodes();
    assert_eq!(config.max_nodes_per_root, None);
}

#[test]
fn test_use_parallel_respects_threshold() {
    let config = DfsConfig::default().parallel_roots(true).parallel_threshold(3);
    assert!(!config.use_parallel(2));
    assert!(config.use_parallel(3));
    assert!(!DfsConfig::default().use_parallel(10_000));
}

#[test]
fn test_validate_rejects_zero_budget() {
    let err = DfsConfig::default().max_nodes_per_root(0).validate().unwrap_err();
    assert!(matches!(err, GraphError::InvalidConfig(ref msg) if msg.contains("max_nodes_per_root")));
}

#[test]
fn test_validate_rejects_zero_threshold() {
    let err = DfsConfig::default().parallel_threshold(0).validate().unwrap_err();
    assert!(matches!(err, GraphError::InvalidConfig(ref msg) if msg.contains("parallel_threshold")));
}

#[test]
fn test_validate_rejects_zero_row_estimate() {
    let err = DfsConfig::default().default_row_estimate(0).validate().unwrap_err();
    assert!(matches!(err, GraphError::InvalidConfig(_)));
}

#[test]
fn test_from_toml_str_partial_uses_defaults() {
    let config = DfsConfig::from_toml_str("parallel_roots = true\nmax_nodes_per_root = 25\n")
        .expect("valid toml");
    assert!(config.parallel_roots);
    assert_eq!(config.max_nodes_per_root, Some(25));
    assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
}

#[test]
fn test_from_toml_str_empty_is_default() {
    let config = DfsConfig::from_toml_str("").expect("empty toml");
    assert_eq!(config, DfsConfig::default());
}

#[test]
fn test_from_toml_str_validates() {
    let err = DfsConfig::from_toml_str("parallel_threshold = 0").unwrap_err();
    assert!(matches!(err, GraphError::InvalidConfig(_)));
}

#[test]
fn test_from_toml_str_parse_error() {
    let err = DfsConfig::from_toml_str("parallel_roots = \"yes please\"").unwrap_err();
    assert!(matches!(err, GraphError::ConfigParse(_)));
}

#[test]
fn test_from_file_roundtrip() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "default_row_estimate = 77").expect("write");

    let config = DfsConfig::from_file(file.path()).expect("load");
    assert_eq!(config.default_row_estimate, 77);
}

#[test]
fn test_from_file_missing_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = DfsConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, GraphError::Io(_)));
}
