use crate::ensure_index;
use crate::error::{Result, RutaError};
use crate::graph::edge::WeightedEdge;
use crate::graph::Graph;
use crate::logging::TraversalStats;
use crate::{log_traversal_stats, trace_time};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::time::Instant;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub vertex: usize,
    pub distance: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance.total_cmp(&other.distance)
    }
}

/// Shortest-path distances and back-pointers from a single root
#[derive(Debug, Clone, PartialEq)]
pub struct DijkstraResult {
    /// Index of the vertex the search started from
    pub root: usize,
    /// Best distance per vertex index; `None` if never reached
    pub distances: Vec<Option<f64>>,
    /// Edge that achieved each reached vertex's distance (root excluded)
    pub path_map: HashMap<usize, WeightedEdge>,
}

impl DijkstraResult {
    /// Distance from the root, `None` when unreached or out of range
    pub fn distance_to(&self, index: usize) -> Option<f64> {
        self.distances.get(index).copied().flatten()
    }

    pub fn is_reachable(&self, index: usize) -> bool {
        self.distance_to(index).is_some()
    }

    /// Edges from the root to `end`, in travel order
    pub fn path_to(&self, end: usize) -> Result<Vec<WeightedEdge>> {
        path_map_to_path(self.root, end, &self.path_map)
    }
}

/// Rebuild the edge sequence from `start` to `end` out of a back-pointer map.
///
/// An empty map, or `start == end`, yields an empty path. A missing
/// back-pointer, or a chain that never arrives at `start`, is reported as
/// [`RutaError::Unreachable`].
pub fn path_map_to_path(
    start: usize,
    end: usize,
    path_map: &HashMap<usize, WeightedEdge>,
) -> Result<Vec<WeightedEdge>> {
    if path_map.is_empty() || start == end {
        return Ok(Vec::new());
    }

    let unreachable = || RutaError::Unreachable { start, end };

    let mut edge = *path_map.get(&end).ok_or_else(unreachable)?;
    let mut path = vec![edge];
    while edge.u != start {
        // A simple path cannot use more edges than the map holds
        if path.len() >= path_map.len() {
            return Err(unreachable());
        }
        edge = *path_map.get(&edge.u).ok_or_else(unreachable)?;
        path.push(edge);
    }

    path.reverse();
    Ok(path)
}

impl<V> Graph<V, WeightedEdge> {
    /// Dijkstra's algorithm from the vertex at `root`.
    ///
    /// A vertex is (re)recorded whenever it is seen for the first time or a
    /// strictly shorter path to it turns up. Heap entries that no longer
    /// match their vertex's recorded distance are skipped on pop.
    #[tracing::instrument(skip(self))]
    pub fn dijkstra_from_index(&self, root: usize) -> Result<DijkstraResult> {
        let started = Instant::now();
        let vertex_count = self.vertex_count();
        ensure_index!(root, vertex_count);

        let mut distances: Vec<Option<f64>> = vec![None; vertex_count];
        let mut path_map: HashMap<usize, WeightedEdge> = HashMap::new();
        let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
        let mut stats = TraversalStats::new();

        distances[root] = Some(0.0);
        stats.record_reached();
        heap.push(Reverse(HeapEntry {
            vertex: root,
            distance: 0.0,
        }));
        stats.record_push();

        while let Some(Reverse(HeapEntry { vertex: u, distance })) = heap.pop() {
            stats.record_pop();

            // Every pushed vertex has a recorded distance
            let Some(dist_u) = distances[u] else {
                continue;
            };
            if distance > dist_u {
                stats.record_stale();
                continue;
            }

            for edge in self.edges_of_index(u)? {
                let path_weight = edge.weight + dist_u;
                let improves = match distances[edge.v] {
                    None => {
                        stats.record_reached();
                        true
                    }
                    Some(dist_v) => dist_v > path_weight,
                };

                if improves {
                    distances[edge.v] = Some(path_weight);
                    path_map.insert(edge.v, *edge);
                    heap.push(Reverse(HeapEntry {
                        vertex: edge.v,
                        distance: path_weight,
                    }));
                    stats.record_push();
                }
            }
        }

        log_traversal_stats!(stats, "dijkstra");
        trace_time!(started, "dijkstra", reached = stats.reached);

        Ok(DijkstraResult {
            root,
            distances,
            path_map,
        })
    }
}

impl<V: PartialEq + std::fmt::Debug> Graph<V, WeightedEdge> {
    /// Dijkstra's algorithm from the first vertex equal to `root`
    pub fn dijkstra(&self, root: &V) -> Result<DijkstraResult> {
        self.dijkstra_from_index(self.index_of(root)?)
    }
}
