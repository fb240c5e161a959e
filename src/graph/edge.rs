use serde::Serialize;
use std::cmp::Ordering;

use crate::error::{Result, RutaError};

/// Common shape of every edge stored in a [`Graph`](crate::graph::Graph).
///
/// The container only needs the endpoints and a way to build the mirror
/// entry for the far endpoint's adjacency list.
pub trait GraphEdge: Copy {
    /// Index of the vertex this edge leaves from
    fn u(&self) -> usize;
    /// Index of the vertex this edge arrives at
    fn v(&self) -> usize;
    /// Same edge with its endpoints swapped
    fn reversed(&self) -> Self;

    /// Reject edges the algorithms cannot handle before they are stored
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Unweighted connection between two vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
}

impl Edge {
    pub fn new(u: usize, v: usize) -> Self {
        Edge { u, v }
    }
}

impl GraphEdge for Edge {
    fn u(&self) -> usize {
        self.u
    }

    fn v(&self) -> usize {
        self.v
    }

    fn reversed(&self) -> Self {
        Edge::new(self.v, self.u)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.u, self.v)
    }
}

/// Connection between two vertex indices carrying a non-negative weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightedEdge {
    pub u: usize,
    pub v: usize,
    pub weight: f64,
}

impl WeightedEdge {
    pub fn new(u: usize, v: usize, weight: f64) -> Self {
        WeightedEdge { u, v, weight }
    }

    /// The unweighted edge underneath
    pub fn edge(&self) -> Edge {
        Edge::new(self.u, self.v)
    }

    /// Total order by weight alone; equal weights compare equal
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

impl GraphEdge for WeightedEdge {
    fn u(&self) -> usize {
        self.u
    }

    fn v(&self) -> usize {
        self.v
    }

    fn reversed(&self) -> Self {
        WeightedEdge::new(self.v, self.u, self.weight)
    }

    fn validate(&self) -> Result<()> {
        if self.weight.is_finite() && self.weight >= 0.0 {
            Ok(())
        } else {
            Err(RutaError::InvalidWeight {
                weight: self.weight,
            })
        }
    }
}

impl std::fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}> {}", self.u, self.weight, self.v)
    }
}

/// Wrapper for BinaryHeap to use as min-heap on edge weight
#[derive(Debug, Clone, Copy)]
pub struct ByWeight(pub WeightedEdge);

impl PartialEq for ByWeight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ByWeight {}

impl PartialOrd for ByWeight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByWeight {
    // Reversed so the std max-heap pops the lightest edge first
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp_weight(&self.0)
    }
}
