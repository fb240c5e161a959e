//! Ruta
//!
//! Generic undirected graphs over arbitrary vertex types, with breadth-first
//! search, Dijkstra shortest paths and Jarník minimum spanning trees.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod search;

pub use error::{Result, RutaError};
pub use graph::{
    total_weight, DijkstraResult, Edge, Graph, UnweightedGraph, WeightedEdge, WeightedGraph,
};
