//! Common test utilities for integration tests.
//!
//! - `fixtures`: deterministic graph generators (no mocks)
//! - `helpers`: reference reachability and row verification

pub mod helpers;
