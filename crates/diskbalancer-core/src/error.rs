//! Error types for the disk balancer library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for every stage of plan creation.
///
/// The variants line up with the stages of the plan command: input
/// validation, node resolution, planning and artifact persistence.
#[derive(Error, Debug)]
pub enum DiskBalancerError {
    /// A required option is missing or a supplied value does not parse
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// The node identifier matched no node in the cluster snapshot
    #[error("Unable to find the specified node. {identifier}")]
    NodeNotFound { identifier: String },
    /// The planner failed to produce a plan
    #[error("Planning error: {message}")]
    Planning { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> DiskBalancerError {
        DiskBalancerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl DiskBalancerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a planning error from anything printable.
    pub fn planning(message: impl Into<String>) -> Self {
        Self::Planning {
            message: message.into(),
        }
    }

    /// Wraps an IO error with the path it happened at.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// Returns true for errors raised while writing plan artifacts.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::FileSystem { .. } | Self::Serialization { .. })
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to a configuration error.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context to any error type, converting to a planning error.
    fn planning_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| DiskBalancerError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }

    fn planning_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| DiskBalancerError::Planning {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Result type alias for disk balancer operations
pub type Result<T> = std::result::Result<T, DiskBalancerError>;
