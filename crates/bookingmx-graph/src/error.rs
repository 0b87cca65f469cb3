//! Error types for city graph operations.
//!
//! Mutating graph primitives fail fast with a [`GraphError`]. Dataset
//! validation is different: it reports problems as data through
//! [`ValidationReport`](crate::dataset::ValidationReport) and never returns
//! an error.

use thiserror::Error;

use crate::dataset::ValidationReason;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Error type for all graph operations.
#[derive(Error, Debug)]
pub enum GraphError {
    // ========== Graph Structure Errors ==========
    /// City name rejected at insertion time (empty or whitespace-only).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Referenced city is not registered in the graph.
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    /// Edge distance is negative, NaN or infinite.
    #[error("Invalid distance: {0} (must be finite and >= 0)")]
    InvalidDistance(f64),

    // ========== Dataset Errors ==========
    /// Dataset failed structural validation before building.
    #[error("Invalid dataset: {0}")]
    InvalidDataset(ValidationReason),

    // ========== Serialization Errors ==========
    /// Dataset JSON could not be parsed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    // ========== I/O Errors ==========
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json errors include line/column info in to_string()
        GraphError::Serialization(err.to_string())
    }
}

static_assertions::assert_impl_all!(GraphError: Send, Sync, std::error::Error);
