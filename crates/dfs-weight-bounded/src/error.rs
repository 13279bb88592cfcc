//! Error types for weight-bounded DFS operations.
//!
//! Column shape problems and malformed table-function arguments are detected
//! before any traversal starts, so a failed call never yields partial rows.
//! Weight overflow is not an error: an overflowing path is simply over budget.

use thiserror::Error;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Error type for index construction, traversal and the table-function
/// boundary.
#[derive(Error, Debug)]
pub enum GraphError {
    // ========== Input Shape Errors ==========
    /// Columns that must be parallel have different lengths.
    #[error("Input shape mismatch: columns {columns:?} have lengths {lengths:?}")]
    InputShape {
        columns: Vec<&'static str>,
        lengths: Vec<usize>,
    },

    // ========== Argument Errors ==========
    /// Wrong number of table-function arguments.
    #[error("Expected {expected} arguments, got {actual}")]
    ArgumentCount { expected: usize, actual: usize },

    /// Some, but not all, arguments were null.
    #[error("Either all arguments should be null or none should be")]
    MixedNullArguments,

    /// An argument could not be read as an unsigned 32-bit column.
    #[error("Invalid argument {index} ({name}): {reason}")]
    InvalidArgument {
        index: usize,
        name: &'static str,
        reason: String,
    },

    // ========== Traversal Errors ==========
    /// The per-root node budget was exhausted.
    #[error("Traversal from root {root} exceeded node budget of {limit}")]
    TraversalBudgetExceeded { root: u32, limit: usize },

    // ========== Configuration Errors ==========
    /// Invalid configuration parameter.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    // ========== I/O Errors ==========
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Build an `InputShape` error from `(column name, length)` pairs.
    pub fn input_shape(columns: &[(&'static str, usize)]) -> Self {
        GraphError::InputShape {
            columns: columns.iter().map(|(name, _)| *name).collect(),
            lengths: columns.iter().map(|(_, len)| *len).collect(),
        }
    }

    /// True for errors caused by the caller's columns rather than config or IO.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            GraphError::InputShape { .. }
                | GraphError::ArgumentCount { .. }
                | GraphError::MixedNullArguments
                | GraphError::InvalidArgument { .. }
        )
    }
}

impl From<toml::de::Error> for GraphError {
    fn from(err: toml::de::Error) -> Self {
        GraphError::ConfigParse(err.to_string())
    }
}
