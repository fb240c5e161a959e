//! Graphs whose edges carry no weight
//!
//! Besides edge insertion, the only thing an unweighted graph adds is the
//! neighbor expansion consumed by [`crate::search::bfs`].

use std::fmt;

use crate::error::Result;
use crate::graph::edge::Edge;
use crate::graph::Graph;

/// Undirected graph with plain [`Edge`]s
pub type UnweightedGraph<V> = Graph<V, Edge>;

impl<V> Graph<V, Edge> {
    pub fn add_edge_by_indices(&mut self, u: usize, v: usize) -> Result<()> {
        self.add_edge(Edge::new(u, v))
    }
}

impl<V: PartialEq + fmt::Debug> Graph<V, Edge> {
    /// Add an edge by looking up both endpoints by value
    pub fn add_edge_by_vertices(&mut self, first: &V, second: &V) -> Result<()> {
        let u = self.index_of(first)?;
        let v = self.index_of(second)?;
        self.add_edge(Edge::new(u, v))
    }
}

impl<V: PartialEq + Clone + fmt::Debug> Graph<V, Edge> {
    /// Owned neighbor values of `vertex`.
    ///
    /// A value that is not in the graph has no successors.
    pub fn successors(&self, vertex: &V) -> Vec<V> {
        match self.neighbors_of(vertex) {
            Ok(neighbors) => neighbors.into_iter().cloned().collect(),
            Err(err) => {
                tracing::debug!(error = %err, "expanding unknown vertex");
                Vec::new()
            }
        }
    }

    /// Neighbor expansion in the shape [`crate::search::bfs`] expects.
    ///
    /// Borrows the graph, so it cannot be mutated while a search holds it.
    pub fn neighbor_fn(&self) -> impl Fn(&V) -> Vec<V> + '_ {
        move |vertex| self.successors(vertex)
    }
}

impl<V: fmt::Display> fmt::Display for Graph<V, Edge> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, vertex) in self.vertices().iter().enumerate() {
            let neighbors = self.neighbors_of_index(index).map_err(|_| fmt::Error)?;
            let rendered: Vec<String> = neighbors.iter().map(|n| n.to_string()).collect();
            writeln!(f, "{} -> [{}]", vertex, rendered.join(", "))?;
        }
        Ok(())
    }
}
