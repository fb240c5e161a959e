//! Graph descriptions loaded from TOML
//!
//! A description lists vertex labels and labelled edges:
//!
//! ```toml
//! vertices = ["Seattle", "Chicago"]
//!
//! [[edges]]
//! from = "Seattle"
//! to = "Chicago"
//! weight = 1737.0
//! ```

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{Result, RutaError};
use crate::graph::{UnweightedGraph, WeightedGraph};

pub use types::{EdgeConfig, GraphConfig, GRAPH_FORMAT_VERSION};

impl GraphConfig {
    pub fn new(vertices: Vec<String>) -> Self {
        GraphConfig {
            vertices,
            ..Default::default()
        }
    }

    /// Parse a description from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: GraphConfig = toml::from_str(content)?;
        if config.version != GRAPH_FORMAT_VERSION {
            bail_invalid!("graph format version", config.version);
        }
        Ok(config)
    }

    /// Load a description from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            vertices = config.vertices.len(),
            edges = config.edges.len(),
            "loaded graph description"
        );
        Ok(config)
    }

    /// Save the description to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RutaError::Other(format!("failed to serialize graph: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Build an unweighted graph; edge weights are ignored
    pub fn build_unweighted(&self) -> Result<UnweightedGraph<String>> {
        let mut graph = UnweightedGraph::new(self.vertices.clone());
        for edge in &self.edges {
            graph.add_edge_by_vertices(&edge.from, &edge.to)?;
        }
        Ok(graph)
    }

    /// Build a weighted graph; every edge must carry a weight
    pub fn build_weighted(&self) -> Result<WeightedGraph<String>> {
        let mut graph = WeightedGraph::new(self.vertices.clone());
        for edge in &self.edges {
            let Some(weight) = edge.weight else {
                bail_invalid!("edge weight", format!("{}-{} has none", edge.from, edge.to));
            };
            graph.add_edge_by_vertices(&edge.from, &edge.to, weight)?;
        }
        Ok(graph)
    }
}
