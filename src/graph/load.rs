//! Loading graphs from JSON or YAML files

use super::adjacency::{Graph, WeightedGraph};
use crate::error::{PrimerError, PrimerResult};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Supported on-disk graph encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Json,
    Yaml,
}

impl GraphFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> PrimerResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(PrimerError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Decode `content` in this format
    pub fn parse<T: DeserializeOwned>(self, content: &str) -> PrimerResult<T> {
        match self {
            Self::Json => Ok(serde_json::from_str(content)?),
            Self::Yaml => Ok(serde_yaml::from_str(content)?),
        }
    }
}

fn load<T: DeserializeOwned>(path: &Path) -> PrimerResult<T> {
    let format = GraphFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    let value = format.parse(&content)?;
    tracing::debug!(path = %path.display(), ?format, "loaded graph file");
    Ok(value)
}

/// Load an unweighted graph, e.g. `{"A": ["B"], "B": ["A"]}`
pub fn load_graph(path: impl AsRef<Path>) -> PrimerResult<Graph> {
    load(path.as_ref())
}

/// Load a weighted graph, e.g. `{"A": [{"to": "B", "weight": 2.0}]}`
pub fn load_weighted_graph(path: impl AsRef<Path>) -> PrimerResult<WeightedGraph> {
    load(path.as_ref())
}
