//! Similarity run configuration
//!
//! The metric choice, the worker count and the LCA flag are the whole configuration
//! surface of a run. They travel as one value into the use case; nothing is stored in
//! process-wide state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigFileV1, SUPPORTED_VERSIONS};
use super::validation::Validatable;

/// Upper bound on the worker pool size
pub const MAX_WORKERS: usize = 128;

/// Distance metric used to score a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Metric {
    /// `d_tax`: ancestor-mediated path cost relative to both terms' root distances
    #[default]
    #[serde(rename = "tax")]
    Taxonomic,

    /// `d^str_tax`: depth differences normalized by the deepest annotated term
    #[serde(rename = "str")]
    Structural,

    /// `d_ps`: weight of the shared ancestor against the paths below it
    #[serde(rename = "ps")]
    Proportional,
}

impl Metric {
    /// Short names accepted on the command line and in YAML
    pub const NAMES: [&'static str; 3] = ["tax", "str", "ps"];

    pub fn all() -> &'static [Metric] {
        &[Self::Taxonomic, Self::Structural, Self::Proportional]
    }

    /// Short name (`tax`, `str`, `ps`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Taxonomic => "tax",
            Self::Structural => "str",
            Self::Proportional => "ps",
        }
    }

    /// Conventional notation used in reports
    pub fn notation(&self) -> &'static str {
        match self {
            Self::Taxonomic => "d_tax",
            Self::Structural => "d^str_tax",
            Self::Proportional => "d_ps",
        }
    }

    /// Whether scoring needs the depth index
    pub fn requires_depth(&self) -> bool {
        matches!(self, Self::Structural)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Metric {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tax" => Ok(Self::Taxonomic),
            "str" => Ok(Self::Structural),
            "ps" => Ok(Self::Proportional),
            other => Err(ConfigError::unknown_metric(other, &Self::NAMES)),
        }
    }
}

/// Configuration for one similarity run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityConfig {
    pub metric: Metric,

    /// Number of pool workers (1..=MAX_WORKERS); further clamped to the pair count
    pub workers: usize,

    /// Compute the lowest common ancestors of every pair for the report
    pub with_lca: bool,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            metric: Metric::Taxonomic,
            workers: 1,
            with_lca: false,
        }
    }
}

impl SimilarityConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_lca(mut self, enabled: bool) -> Self {
        self.with_lca = enabled;
        self
    }

    /// Load from YAML file (v1 schema)
    ///
    /// Missing keys keep their defaults. The result is validated before it is returned.
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse YAML text (v1 schema)
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        match file.version {
            None => return Err(ConfigError::MissingVersion),
            Some(found) if !SUPPORTED_VERSIONS.contains(&found) => {
                return Err(ConfigError::UnsupportedVersion {
                    found,
                    supported: SUPPORTED_VERSIONS.to_vec(),
                });
            }
            Some(_) => {}
        }

        let defaults = Self::default();
        let config = Self {
            metric: file.metric.unwrap_or(defaults.metric),
            workers: file.workers.unwrap_or(defaults.workers),
            with_lca: file.lca.unwrap_or(defaults.with_lca),
        };
        config.validate()?;
        Ok(config)
    }

    /// Export to YAML
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            metric: Some(self.metric),
            workers: Some(self.workers),
            lca: Some(self.with_lca),
        };

        serde_yaml::to_string(&file).map_err(ConfigError::Yaml)
    }
}

impl Validatable for SimilarityConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.workers < 1 || self.workers > MAX_WORKERS {
            return Err(ConfigError::range_with_hint(
                "workers",
                self.workers,
                1,
                MAX_WORKERS,
                "The worker pool needs at least one thread",
            ));
        }

        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "SimilarityConfig"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimilarityConfig::default();
        assert_eq!(config.metric, Metric::Taxonomic);
        assert_eq!(config.workers, 1);
        assert!(!config.with_lca);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SimilarityConfig::new()
            .metric(Metric::Proportional)
            .workers(8)
            .with_lca(true);
        assert_eq!(config.metric, Metric::Proportional);
        assert_eq!(config.workers, 8);
        assert!(config.with_lca);
    }

    #[test]
    fn test_zero_workers_rejected() {
        let err = SimilarityConfig::new().workers(0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Range { .. }));
    }

    #[test]
    fn test_too_many_workers_rejected() {
        assert!(SimilarityConfig::new().workers(MAX_WORKERS).validate().is_ok());
        assert!(SimilarityConfig::new()
            .workers(MAX_WORKERS + 1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_metric_from_str() {
        assert_eq!("tax".parse::<Metric>().unwrap(), Metric::Taxonomic);
        assert_eq!("STR".parse::<Metric>().unwrap(), Metric::Structural);
        assert_eq!(" ps ".parse::<Metric>().unwrap(), Metric::Proportional);

        let err = "pss".parse::<Metric>().unwrap_err();
        assert!(err.to_string().contains("Did you mean 'ps'?"));
    }

    #[test]
    fn test_metric_names_roundtrip() {
        for metric in Metric::all() {
            assert_eq!(metric.as_str().parse::<Metric>().unwrap(), *metric);
        }
        assert_eq!(Metric::Structural.notation(), "d^str_tax");
        assert!(Metric::Structural.requires_depth());
        assert!(!Metric::Taxonomic.requires_depth());
    }

    #[test]
    fn test_yaml_loading() {
        let yaml_content = r#"
version: 1
metric: str
workers: 4
lca: true
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml_content.as_bytes()).unwrap();

        let config = SimilarityConfig::from_yaml(temp_file.path()).unwrap();
        assert_eq!(config.metric, Metric::Structural);
        assert_eq!(config.workers, 4);
        assert!(config.with_lca);
    }

    #[test]
    fn test_yaml_partial_keeps_defaults() {
        let config = SimilarityConfig::from_yaml_str("version: 1\nmetric: ps\n").unwrap();
        assert_eq!(config.metric, Metric::Proportional);
        assert_eq!(config.workers, 1);
        assert!(!config.with_lca);
    }

    #[test]
    fn test_yaml_missing_version() {
        let err = SimilarityConfig::from_yaml_str("metric: tax\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingVersion));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let err = SimilarityConfig::from_yaml_str("version: 2\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedVersion { found: 2, .. }));
    }

    #[test]
    fn test_yaml_unknown_field_rejected() {
        let err = SimilarityConfig::from_yaml_str("version: 1\nthreads: 4\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_yaml_invalid_workers_rejected() {
        let err = SimilarityConfig::from_yaml_str("version: 1\nworkers: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Range { .. }));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = SimilarityConfig::new()
            .metric(Metric::Structural)
            .workers(16)
            .with_lca(true);

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("metric: str"));

        let recovered = SimilarityConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(recovered, config);
    }
}
