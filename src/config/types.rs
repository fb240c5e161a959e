//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Current graph description format version
pub const GRAPH_FORMAT_VERSION: u32 = 1;

/// Description of a graph: its vertices and the edges between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Vertex labels, in index order
    #[serde(default)]
    pub vertices: Vec<String>,

    /// Edge descriptors, resolved against `vertices` by label
    #[serde(default)]
    pub edges: Vec<EdgeConfig>,
}

/// One undirected edge between two labelled vertices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub from: String,
    pub to: String,

    /// Required when building a weighted graph, ignored otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl EdgeConfig {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        EdgeConfig {
            from: from.into(),
            to: to.into(),
            weight: None,
        }
    }

    pub fn weighted(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        EdgeConfig {
            weight: Some(weight),
            ..EdgeConfig::new(from, to)
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            version: GRAPH_FORMAT_VERSION,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }
}

fn default_version() -> u32 {
    GRAPH_FORMAT_VERSION
}
