//! Undirected graph container and algorithms
//!
//! - `edge`: edge types and the `GraphEdge` seam used by the container
//! - `container`: generic `Graph<V, E>` with mirrored adjacency lists
//! - `unweighted`: plain edges and the BFS neighbor expansion
//! - `weighted`: weighted edges, path weight and rendering
//! - `algos`: Dijkstra and minimum spanning tree

pub mod algos;
pub mod container;
pub mod edge;
pub mod unweighted;
pub mod weighted;

pub use algos::{path_map_to_path, DijkstraResult};
pub use container::Graph;
pub use edge::{ByWeight, Edge, GraphEdge, WeightedEdge};
pub use unweighted::UnweightedGraph;
pub use weighted::{total_weight, WeightedGraph};
