//! Error types and exit codes for spf
//!
//! Exit codes:
//! - 0: Success (a computation that finds no path is still a success)
//! - 1: Generic failure (IO, parse)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown router, duplicate router, invalid endpoint)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the spf binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown or duplicate routers (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building a topology or running SPF
#[derive(Error, Debug)]
pub enum SpfError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    /// A link references a router that was never registered
    #[error("node not found: {name}")]
    NodeNotFound { name: String },

    /// A router name was registered twice
    #[error("duplicate node: {name}")]
    DuplicateNode { name: String },

    /// Source or target of a path computation is not registered
    #[error("invalid endpoint: {name}")]
    InvalidEndpoint { name: String },

    #[error("invalid topology in {path:?}: {reason}")]
    InvalidTopology { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl SpfError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        SpfError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a router name that was never registered
    pub fn node_not_found(name: impl Into<String>) -> Self {
        SpfError::NodeNotFound { name: name.into() }
    }

    /// Create an error for an unresolvable SPF endpoint
    pub fn invalid_endpoint(name: impl Into<String>) -> Self {
        SpfError::InvalidEndpoint { name: name.into() }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SpfError::UnknownFormat(_) | SpfError::UsageError(_) => ExitCode::Usage,

            SpfError::NodeNotFound { .. }
            | SpfError::DuplicateNode { .. }
            | SpfError::InvalidEndpoint { .. }
            | SpfError::InvalidTopology { .. } => ExitCode::Data,

            SpfError::Io(_)
            | SpfError::Json(_)
            | SpfError::Toml(_)
            | SpfError::FailedOperationWithTarget { .. }
            | SpfError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            SpfError::UnknownFormat(_) => "unknown_format",
            SpfError::UsageError(_) => "usage_error",
            SpfError::NodeNotFound { .. } => "node_not_found",
            SpfError::DuplicateNode { .. } => "duplicate_node",
            SpfError::InvalidEndpoint { .. } => "invalid_endpoint",
            SpfError::InvalidTopology { .. } => "invalid_topology",
            SpfError::Io(_) => "io_error",
            SpfError::Json(_) => "json_error",
            SpfError::Toml(_) => "toml_error",
            SpfError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            SpfError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for spf operations
pub type Result<T> = std::result::Result<T, SpfError>;
