//! Graphs whose edges carry a non-negative weight
//!
//! The shortest-path and spanning-tree algorithms live in
//! [`crate::graph::algos`]; this module holds insertion, path weight and
//! text rendering.

use std::fmt;

use crate::error::Result;
use crate::graph::algos::DijkstraResult;
use crate::graph::edge::WeightedEdge;
use crate::graph::Graph;

/// Undirected graph with [`WeightedEdge`]s
pub type WeightedGraph<V> = Graph<V, WeightedEdge>;

/// Sum of the weights along `path`; an empty path weighs 0
pub fn total_weight(path: &[WeightedEdge]) -> f64 {
    path.iter().map(|edge| edge.weight).sum()
}

impl<V> Graph<V, WeightedEdge> {
    pub fn add_edge_by_indices(&mut self, u: usize, v: usize, weight: f64) -> Result<()> {
        self.add_edge(WeightedEdge::new(u, v, weight))
    }

    /// Vertex values paired with their distance from the Dijkstra root, in
    /// index order. Unreached vertices pair with `None`.
    pub fn distances_by_vertex<'a>(&'a self, result: &DijkstraResult) -> Vec<(&'a V, Option<f64>)> {
        self.vertices()
            .iter()
            .enumerate()
            .map(|(index, vertex)| (vertex, result.distance_to(index)))
            .collect()
    }
}

impl<V: PartialEq + fmt::Debug> Graph<V, WeightedEdge> {
    /// Add a weighted edge by looking up both endpoints by value
    pub fn add_edge_by_vertices(&mut self, first: &V, second: &V, weight: f64) -> Result<()> {
        let u = self.index_of(first)?;
        let v = self.index_of(second)?;
        self.add_edge_by_indices(u, v, weight)
    }
}

impl<V: fmt::Display> Graph<V, WeightedEdge> {
    /// Render a weighted path as one `u weight> v` line per edge followed by
    /// a total line. Fails if an edge names a vertex outside the graph.
    pub fn render_path(&self, path: &[WeightedEdge]) -> Result<String> {
        let mut out = String::new();
        for edge in path {
            let from = self.vertex_at(edge.u)?;
            let to = self.vertex_at(edge.v)?;
            out.push_str(&format!("{} {}> {}\n", from, edge.weight, to));
        }
        out.push_str(&format!("Total Weight: {}\n", total_weight(path)));
        Ok(out)
    }
}

impl<V: fmt::Display> fmt::Display for Graph<V, WeightedEdge> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, vertex) in self.vertices().iter().enumerate() {
            let edges = self.edges_of_index(index).map_err(|_| fmt::Error)?;
            let mut rendered = Vec::with_capacity(edges.len());
            for edge in edges {
                let neighbor = self.vertex_at(edge.v).map_err(|_| fmt::Error)?;
                rendered.push(format!("({}, {})", neighbor, edge.weight));
            }
            writeln!(f, "{} -> [{}]", vertex, rendered.join(", "))?;
        }
        Ok(())
    }
}
