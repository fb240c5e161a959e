use crate::error::Result;
use crate::graph::edge::{ByWeight, WeightedEdge};
use crate::graph::Graph;
use crate::logging::TraversalStats;
use crate::{log_traversal_stats, trace_time};
use std::collections::BinaryHeap;
use std::time::Instant;

/// State tracked while growing the tree
struct JarnikState {
    visited: Vec<bool>,
    heap: BinaryHeap<ByWeight>,
    stats: TraversalStats,
}

impl JarnikState {
    fn new(vertex_count: usize) -> Self {
        Self {
            visited: vec![false; vertex_count],
            heap: BinaryHeap::new(),
            stats: TraversalStats::new(),
        }
    }

    /// Mark `index` visited and queue every edge leaving the tree from it
    fn visit(&mut self, index: usize, edges: &[WeightedEdge]) {
        self.visited[index] = true;
        self.stats.record_reached();
        for edge in edges {
            if !self.visited[edge.v] {
                self.heap.push(ByWeight(*edge));
                self.stats.record_push();
            }
        }
    }
}

impl<V> Graph<V, WeightedEdge> {
    /// Minimum spanning tree of the component containing `start`
    /// (Jarník's algorithm).
    ///
    /// Returns the accepted edges in the order they joined the tree. An
    /// out-of-range `start` yields an empty tree.
    #[tracing::instrument(skip(self))]
    pub fn mst(&self, start: usize) -> Vec<WeightedEdge> {
        let started = Instant::now();
        let Ok(start_edges) = self.edges_of_index(start) else {
            tracing::debug!(vertex_count = self.vertex_count(), "mst start out of range");
            return Vec::new();
        };

        let mut state = JarnikState::new(self.vertex_count());
        let mut tree = Vec::new();
        state.visit(start, start_edges);

        while let Some(ByWeight(edge)) = state.heap.pop() {
            state.stats.record_pop();
            if state.visited[edge.v] {
                state.stats.record_stale();
                continue;
            }
            tree.push(edge);
            // Far endpoints of stored edges are always in range
            let next = self.edges_of_index(edge.v).unwrap_or(&[]);
            state.visit(edge.v, next);
        }

        log_traversal_stats!(state.stats, "mst");
        trace_time!(started, "mst", edges = tree.len());
        tree
    }
}

impl<V: PartialEq + std::fmt::Debug> Graph<V, WeightedEdge> {
    /// Minimum spanning tree starting from the first vertex equal to `start`
    pub fn mst_from(&self, start: &V) -> Result<Vec<WeightedEdge>> {
        Ok(self.mst(self.index_of(start)?))
    }
}
