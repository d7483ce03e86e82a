//! Report generation
//!
//! Writes a [`SimilarityTable`](crate::features::similarity::SimilarityTable) as TSV or
//! JSON. Node ids are rendered through a caller-supplied label table; an id without a
//! label prints as the id itself.

pub mod json;
pub mod tsv;

pub use json::JsonReporter;
pub use tsv::TsvReporter;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::shared::models::NodeId;

/// Output format of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Tsv,
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tsv => write!(f, "tsv"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tsv" => Ok(Self::Tsv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown report format '{}' (expected tsv or json)", other)),
        }
    }
}

pub(crate) fn label(labels: &[String], v: NodeId) -> Cow<'_, str> {
    match labels.get(v) {
        Some(label) => Cow::Borrowed(label.as_str()),
        None => Cow::Owned(v.to_string()),
    }
}
