//! Output format handling for ruta
//!
//! Supports two output formats:
//! - human: the line-oriented text rendering of paths and distances
//! - json: the same information as a serialized report
//!
//! Both are display-only; nothing parses them back.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RutaError};
use crate::graph::{total_weight, DijkstraResult, WeightedEdge, WeightedGraph};

/// Output format for rendered results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = RutaError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(RutaError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// One hop of a weighted path, with endpoints resolved to vertex labels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathStep {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Serializable view of a weighted path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport {
    pub steps: Vec<PathStep>,
    pub total_weight: f64,
}

impl PathReport {
    pub fn build<V: fmt::Display>(graph: &WeightedGraph<V>, path: &[WeightedEdge]) -> Result<Self> {
        let steps = path
            .iter()
            .map(|edge| {
                Ok(PathStep {
                    from: graph.vertex_at(edge.u)?.to_string(),
                    to: graph.vertex_at(edge.v)?.to_string(),
                    weight: edge.weight,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(PathReport {
            steps,
            total_weight: total_weight(path),
        })
    }
}

/// Distance of one vertex from a Dijkstra root
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceEntry {
    pub vertex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// Render a weighted path in the requested format
pub fn format_path<V: fmt::Display>(
    graph: &WeightedGraph<V>,
    path: &[WeightedEdge],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Human => graph.render_path(path),
        OutputFormat::Json => {
            let report = PathReport::build(graph, path)?;
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

/// Render every vertex's distance from the root of `result`
pub fn format_distances<V: fmt::Display>(
    graph: &WeightedGraph<V>,
    result: &DijkstraResult,
    format: OutputFormat,
) -> Result<String> {
    let entries: Vec<DistanceEntry> = graph
        .distances_by_vertex(result)
        .into_iter()
        .map(|(vertex, distance)| DistanceEntry {
            vertex: vertex.to_string(),
            distance,
        })
        .collect();

    match format {
        OutputFormat::Human => Ok(entries
            .iter()
            .map(|entry| match entry.distance {
                Some(distance) => format!("{} : {}\n", entry.vertex, distance),
                None => format!("{} : unreachable\n", entry.vertex),
            })
            .collect()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&entries)?),
    }
}
