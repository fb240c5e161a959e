//! Error types for ruta
//!
//! Every fallible operation in the crate returns [`Result`], carrying a
//! [`RutaError`]. Lookups by index or by value fail loudly; the only
//! "soft" failure is a minimum spanning tree requested from an out-of-range
//! start, which yields an empty tree instead of an error.

mod macros;

use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum RutaError {
    #[error("vertex index {index} out of range (graph has {vertex_count} vertices)")]
    InvalidIndex { index: usize, vertex_count: usize },

    #[error("vertex not found: {vertex}")]
    VertexNotFound { vertex: String },

    #[error("no path from vertex {start} to vertex {end}")]
    Unreachable { start: usize, end: usize },

    #[error("invalid edge weight {weight} (weights must be finite and non-negative)")]
    InvalidWeight { weight: f64 },

    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl RutaError {
    /// Create an error for an index outside `[0, vertex_count)`
    pub fn invalid_index(index: usize, vertex_count: usize) -> Self {
        RutaError::InvalidIndex {
            index,
            vertex_count,
        }
    }

    /// Create an error for a vertex value that is not in the graph
    pub fn vertex_not_found(vertex: impl std::fmt::Debug) -> Self {
        RutaError::VertexNotFound {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RutaError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Short identifier used in structured log fields
    pub fn error_type(&self) -> &'static str {
        match self {
            RutaError::InvalidIndex { .. } => "invalid_index",
            RutaError::VertexNotFound { .. } => "vertex_not_found",
            RutaError::Unreachable { .. } => "unreachable",
            RutaError::InvalidWeight { .. } => "invalid_weight",
            RutaError::UnknownFormat(_) => "unknown_format",
            RutaError::InvalidValue { .. } => "invalid_value",
            RutaError::Io(_) => "io_error",
            RutaError::Toml(_) => "toml_error",
            RutaError::Json(_) => "json_error",
            RutaError::Other(_) => "other",
        }
    }
}

/// Result type alias for ruta operations
pub type Result<T> = std::result::Result<T, RutaError>;
