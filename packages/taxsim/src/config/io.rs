//! Configuration I/O (YAML loading)
//!
//! Defines the YAML schema. Conversion to and from `SimilarityConfig` lives in
//! `similarity_config.rs`.

use serde::{Deserialize, Serialize};

use super::similarity_config::Metric;

/// Versions this build can read
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
///
/// ```yaml
/// version: 1
/// metric: str
/// workers: 8
/// lca: true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<Metric>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub workers: Option<usize>,

    /// Report lowest common ancestors for every pair
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lca: Option<bool>,
}
