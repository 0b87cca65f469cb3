//! CLI error type and process exit codes.
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | General error (I/O, output) |
//! | 3 | Configuration error |
//! | 4 | Invalid input (malformed or invalid dataset, bad arguments) |
//! | 5 | City not found |

use bookingmx_graph::GraphError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CliExitCode {
    Success = 0,
    General = 1,
    Config = 3,
    InvalidInput = 4,
    NotFound = 5,
}

impl From<CliExitCode> for i32 {
    fn from(code: CliExitCode) -> Self {
        code as i32
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl CliError {
    pub fn exit_code(&self) -> CliExitCode {
        match self {
            Self::Config(_) => CliExitCode::Config,
            Self::InvalidInput(_) => CliExitCode::InvalidInput,
            Self::Graph(err) => match err {
                GraphError::UnknownCity(_) => CliExitCode::NotFound,
                GraphError::InvalidArgument(_)
                | GraphError::InvalidDistance(_)
                | GraphError::InvalidDataset(_)
                | GraphError::Serialization(_) => CliExitCode::InvalidInput,
                GraphError::Io(_) => CliExitCode::General,
            },
            Self::Output(_) => CliExitCode::General,
        }
    }
}
