//! Graph algorithm implementations
//!
//! Contains the weighted algorithms:
//! - `dijkstra`: single-source shortest paths and path reconstruction
//! - `mst`: Jarník/Prim minimum spanning tree
//!
//! Both drain a `BinaryHeap` with lazy deletion: stale entries are left in
//! the queue and discarded when popped.

pub mod dijkstra;
pub mod mst;

pub use dijkstra::{path_map_to_path, DijkstraResult, HeapEntry};
