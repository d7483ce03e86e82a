//! Error types for taxsim
//!
//! Every variant is fatal: a run either scores all pairs or aborts with one of these.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for taxsim operations
#[derive(Debug, Error)]
pub enum TaxsimError {
    /// Malformed taxonomy or invalid run configuration, detected before any scoring
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A metric was invoked without the auxiliary data it depends on
    #[error("Precondition violated: {0}")]
    Precondition(String),

    /// A pool worker died while scoring its chunk
    #[error("Worker {worker} failed: {reason}")]
    WorkerFailure { worker: usize, reason: String },

    /// Malformed line in one of the input files
    #[error("Parse error in {source_name} at line {line}: {message}")]
    Parse {
        source_name: String,
        line: usize,
        message: String,
    },

    /// Invalid configuration value or configuration file
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TaxsimError {
    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        TaxsimError::Configuration(msg.into())
    }

    /// Create a precondition error
    pub fn precondition(msg: impl Into<String>) -> Self {
        TaxsimError::Precondition(msg.into())
    }

    /// Create a worker failure
    pub fn worker_failure(worker: usize, reason: impl Into<String>) -> Self {
        TaxsimError::WorkerFailure {
            worker,
            reason: reason.into(),
        }
    }

    /// Create a parse error
    pub fn parse(source_name: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        TaxsimError::Parse {
            source_name: source_name.into(),
            line,
            message: message.into(),
        }
    }
}

/// Result type alias for taxsim operations
pub type Result<T> = std::result::Result<T, TaxsimError>;
