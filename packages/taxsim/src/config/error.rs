//! Configuration error types

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Range validation error
    #[error("Invalid range for field '{field}': {value} not in {min}..={max}. {hint}")]
    Range {
        field: String,
        value: String,
        min: String,
        max: String,
        hint: String,
    },

    /// Unknown metric name
    #[error("Unknown metric '{name}'. {suggestion} Valid metrics: tax, str, ps")]
    UnknownMetric { name: String, suggestion: String },

    /// Missing version field in YAML
    #[error("Missing 'version' field in configuration file. Add 'version: 1' to the top of your YAML file.")]
    MissingVersion,

    /// Unsupported version
    #[error("Unsupported configuration version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create a range error with a hint
    pub fn range_with_hint(
        field: impl Into<String>,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
        hint: impl Into<String>,
    ) -> Self {
        Self::Range {
            field: field.into(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
            hint: hint.into(),
        }
    }

    /// Create an unknown metric error suggesting the closest valid name
    pub fn unknown_metric(name: impl Into<String>, valid_names: &[&str]) -> Self {
        let name = name.into();
        let suggestion = find_closest_match(&name, valid_names);

        Self::UnknownMetric { name, suggestion }
    }
}

/// Find closest match using simple edit distance
fn find_closest_match(target: &str, candidates: &[&str]) -> String {
    match candidates
        .iter()
        .min_by_key(|candidate| levenshtein_distance(target, candidate))
    {
        Some(closest) => format!("Did you mean '{}'?", closest),
        None => "No valid metrics available.".to_string(),
    }
}

/// Simple Levenshtein distance implementation
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let mut matrix = vec![vec![0; b.len() + 1]; a.len() + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        matrix[0][j] = j;
    }

    for (i, c1) in a.iter().enumerate() {
        for (j, c2) in b.iter().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            matrix[i + 1][j + 1] = (matrix[i][j + 1] + 1) // deletion
                .min(matrix[i + 1][j] + 1) // insertion
                .min(matrix[i][j] + cost); // substitution
        }
    }

    matrix[a.len()][b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("tax", "tax"), 0);
        assert_eq!(levenshtein_distance("", "ps"), 2);
        assert_eq!(levenshtein_distance("str", ""), 3);
    }

    #[test]
    fn test_unknown_metric_suggests_closest() {
        let err = ConfigError::unknown_metric("taxx", &["tax", "str", "ps"]);
        let msg = err.to_string();
        assert!(msg.contains("taxx"));
        assert!(msg.contains("Did you mean 'tax'?"));
    }

    #[test]
    fn test_closest_match_empty_candidates() {
        let suggestion = find_closest_match("tax", &[]);
        assert!(suggestion.contains("No valid metrics"));
    }

    #[test]
    fn test_range_error_formatting() {
        let err = ConfigError::range_with_hint("workers", 0, 1, 128, "At least one worker is required");
        let msg = err.to_string();
        assert!(msg.contains("workers"));
        assert!(msg.contains("1..=128"));
        assert!(msg.contains("At least one worker"));
    }

    #[test]
    fn test_unsupported_version_error() {
        let err = ConfigError::UnsupportedVersion {
            found: 2,
            supported: vec![1],
        };

        let msg = err.to_string();
        assert!(msg.contains("version 2"));
        assert!(msg.contains("Supported versions: 1"));
    }
}
