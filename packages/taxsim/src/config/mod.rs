//! Run configuration
//!
//! Two layers, applied in order:
//! - YAML file (`version: 1` schema), optional
//! - Builder / command-line overrides
//!
//! # Examples
//!
//! ```rust,ignore
//! use taxsim::config::{Metric, SimilarityConfig};
//!
//! let config = SimilarityConfig::new().metric(Metric::Structural).workers(8);
//! let config = SimilarityConfig::from_yaml("run.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod similarity_config;
pub mod validation;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::ConfigFileV1;
pub use similarity_config::{Metric, SimilarityConfig, MAX_WORKERS};
pub use validation::Validatable;
