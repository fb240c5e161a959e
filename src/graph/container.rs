use crate::ensure_index;
use crate::error::{Result, RutaError};
use crate::graph::edge::GraphEdge;

/// Undirected graph over vertices of type `V` with edges of type `E`.
///
/// Vertices live at dense, 0-based indices fixed at construction. Each
/// logical edge is stored twice: once in the adjacency list of each
/// endpoint, the second copy reversed. Adjacency lists are only handed out
/// as shared slices so that mirroring cannot be broken from outside.
#[derive(Debug, Clone)]
pub struct Graph<V, E> {
    vertices: Vec<V>,
    edges: Vec<Vec<E>>,
}

impl<V, E: GraphEdge> Graph<V, E> {
    /// Create a graph with a fixed vertex set and no edges
    pub fn new(vertices: Vec<V>) -> Self {
        let edges = vertices.iter().map(|_| Vec::new()).collect();
        Graph { vertices, edges }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored adjacency entries (twice the logical edge count)
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Vertex value stored at `index`
    pub fn vertex_at(&self, index: usize) -> Result<&V> {
        self.vertices
            .get(index)
            .ok_or_else(|| RutaError::invalid_index(index, self.vertex_count()))
    }

    /// Raw adjacency list of the vertex at `index`
    pub fn edges_of_index(&self, index: usize) -> Result<&[E]> {
        self.edges
            .get(index)
            .map(Vec::as_slice)
            .ok_or_else(|| RutaError::invalid_index(index, self.vertex_count()))
    }

    /// Vertex values one edge away from `index`, in insertion order
    pub fn neighbors_of_index(&self, index: usize) -> Result<Vec<&V>> {
        // Both endpoints of every stored edge were checked on insertion
        Ok(self
            .edges_of_index(index)?
            .iter()
            .map(|edge| &self.vertices[edge.v()])
            .collect())
    }

    /// Insert `edge` and its mirror.
    ///
    /// This is the only way edges enter the graph. Self-loops and duplicate
    /// edges are accepted as-is. Fails without touching the graph when
    /// either endpoint is out of range or the edge fails validation.
    pub fn add_edge(&mut self, edge: E) -> Result<()> {
        let count = self.vertex_count();
        ensure_index!(edge.u(), count);
        ensure_index!(edge.v(), count);
        edge.validate()?;

        self.edges[edge.u()].push(edge);
        self.edges[edge.v()].push(edge.reversed());
        tracing::trace!(u = edge.u(), v = edge.v(), "edge added");
        Ok(())
    }
}

impl<V: PartialEq + std::fmt::Debug, E: GraphEdge> Graph<V, E> {
    /// Index of the first vertex equal to `vertex`
    pub fn index_of(&self, vertex: &V) -> Result<usize> {
        self.vertices
            .iter()
            .position(|candidate| candidate == vertex)
            .ok_or_else(|| RutaError::vertex_not_found(vertex))
    }

    pub fn neighbors_of(&self, vertex: &V) -> Result<Vec<&V>> {
        self.neighbors_of_index(self.index_of(vertex)?)
    }

    pub fn edges_of(&self, vertex: &V) -> Result<&[E]> {
        self.edges_of_index(self.index_of(vertex)?)
    }
}
