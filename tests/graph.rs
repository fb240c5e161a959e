//! End-to-end scenarios over the public graph API

mod support;

use ruta::format::{format_distances, format_path, OutputFormat};
use ruta::graph::GraphEdge;
use ruta::search::bfs;
use ruta::{total_weight, RutaError, UnweightedGraph, WeightedEdge, WeightedGraph};
use proptest::collection::vec;
use proptest::prelude::*;

use crate::support::diamond;

// ============================================================================
// Helpers
// ============================================================================

fn find(parent: &mut [usize], x: usize) -> usize {
    let mut root = x;
    while parent[root] != root {
        root = parent[root];
    }
    parent[x] = root;
    root
}

/// Cheapest spanning tree weight found by trying every subset of
/// `vertex_count - 1` edges. `None` when the graph is disconnected.
fn brute_force_mst_weight(vertex_count: usize, edges: &[(usize, usize, f64)]) -> Option<f64> {
    let needed = vertex_count - 1;
    let mut best: Option<f64> = None;

    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != needed {
            continue;
        }
        let mut parent: Vec<usize> = (0..vertex_count).collect();
        let mut weight = 0.0;
        let mut acyclic = true;
        for (i, &(u, v, w)) in edges.iter().enumerate() {
            if mask & (1 << i) == 0 {
                continue;
            }
            let (ru, rv) = (find(&mut parent, u), find(&mut parent, v));
            if ru == rv {
                acyclic = false;
                break;
            }
            parent[ru] = rv;
            weight += w;
        }
        // n-1 acyclic edges over n vertices always span
        if acyclic && best.is_none_or(|b| weight < b) {
            best = Some(weight);
        }
    }
    best
}

fn build(vertex_count: usize, edges: &[(usize, usize, f64)]) -> WeightedGraph<usize> {
    let mut graph = WeightedGraph::new((0..vertex_count).collect());
    for &(u, v, w) in edges {
        graph.add_edge_by_indices(u, v, w).unwrap();
    }
    graph
}

/// Between one and six vertices joined by up to eleven edges with integral
/// weights, so sums compare exactly regardless of order
fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
    (1usize..7).prop_flat_map(|n| {
        let edge = (0..n, 0..n, 0u32..20).prop_map(|(u, v, w)| (u, v, f64::from(w)));
        (Just(n), vec(edge, 0..12))
    })
}

/// Vertices reachable from `start`, `start` included
fn component_of(graph: &WeightedGraph<usize>, start: usize) -> Vec<usize> {
    let mut seen = vec![false; graph.vertex_count()];
    let mut stack = vec![start];
    let mut component = Vec::new();
    seen[start] = true;
    while let Some(u) = stack.pop() {
        component.push(u);
        for edge in graph.edges_of_index(u).unwrap() {
            if !seen[edge.v] {
                seen[edge.v] = true;
                stack.push(edge.v);
            }
        }
    }
    component
}

/// Edges inside `component`, renumbered to positions within it
fn induced_edges(component: &[usize], edges: &[(usize, usize, f64)]) -> Vec<(usize, usize, f64)> {
    let local = |x: usize| component.iter().position(|&c| c == x);
    edges
        .iter()
        .filter_map(|&(u, v, w)| Some((local(u)?, local(v)?, w)))
        .collect()
}

/// True when `tree` connects exactly the vertices of `component` without a cycle
fn is_spanning_tree(vertex_count: usize, component: &[usize], tree: &[WeightedEdge]) -> bool {
    if tree.len() + 1 != component.len() {
        return false;
    }
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    tree.iter().all(|edge| {
        if !component.contains(&edge.u) || !component.contains(&edge.v) {
            return false;
        }
        let (ru, rv) = (find(&mut parent, edge.u), find(&mut parent, edge.v));
        parent[ru] = rv;
        ru != rv
    })
}

// ============================================================================
// Diamond scenarios
// ============================================================================

#[test]
fn test_diamond_mst_from_a() {
    let graph = diamond();
    let tree = graph.mst_from(&"A").unwrap();

    assert_eq!(
        tree,
        vec![
            WeightedEdge::new(0, 1, 1.0),
            WeightedEdge::new(1, 2, 2.0),
            WeightedEdge::new(2, 3, 1.0),
        ]
    );
    assert_eq!(total_weight(&tree), 4.0);
    assert!(tree.iter().all(|edge| edge.u != 4 && edge.v != 4));
}

#[test]
fn test_diamond_dijkstra_from_a() {
    let graph = diamond();
    let result = graph.dijkstra(&"A").unwrap();

    assert_eq!(
        result.distances,
        vec![Some(0.0), Some(1.0), Some(3.0), Some(4.0), None]
    );

    let path = result.path_to(3).unwrap();
    assert_eq!(
        path,
        vec![
            WeightedEdge::new(0, 1, 1.0),
            WeightedEdge::new(1, 2, 2.0),
            WeightedEdge::new(2, 3, 1.0),
        ]
    );
    assert_eq!(total_weight(&path), result.distance_to(3).unwrap());
}

#[test]
fn test_diamond_unreachable_vertex() {
    let graph = diamond();
    let result = graph.dijkstra(&"A").unwrap();

    assert!(!result.is_reachable(4));
    assert!(matches!(
        result.path_to(4),
        Err(RutaError::Unreachable { start: 0, end: 4 })
    ));
    assert!(graph.mst_from(&"E").unwrap().is_empty());
}

#[test]
fn test_diamond_rendering_is_stable() {
    let graph = diamond();
    let path = graph.dijkstra(&"A").unwrap().path_to(3).unwrap();

    let first = graph.to_string();
    assert_eq!(first, graph.to_string());
    assert_eq!(
        format_path(&graph, &path, OutputFormat::Human).unwrap(),
        "A 1> B\nB 2> C\nC 1> D\nTotal Weight: 4\n"
    );
    assert_eq!(
        format_path(&graph, &path, OutputFormat::Human).unwrap(),
        graph.render_path(&path).unwrap()
    );
}

#[test]
fn test_diamond_distances_report() {
    let graph = diamond();
    let result = graph.dijkstra(&"A").unwrap();
    assert_eq!(
        format_distances(&graph, &result, OutputFormat::Human).unwrap(),
        "A : 0\nB : 1\nC : 3\nD : 4\nE : unreachable\n"
    );
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_add_edge_is_symmetric() {
    let mut graph = UnweightedGraph::new(vec!['a', 'b', 'c']);
    graph.add_edge_by_vertices(&'a', &'c').unwrap();

    assert!(graph.neighbors_of(&'a').unwrap().contains(&&'c'));
    assert!(graph.neighbors_of(&'c').unwrap().contains(&&'a'));
    assert!(graph.neighbors_of(&'b').unwrap().is_empty());

    let stored = graph.edges_of(&'c').unwrap()[0];
    assert_eq!(stored, graph.edges_of(&'a').unwrap()[0].reversed());
}

#[test]
fn test_failed_insertion_leaves_graph_unchanged() {
    let mut graph = WeightedGraph::new(vec!["x", "y"]);
    assert!(graph.add_edge_by_indices(0, 5, 1.0).is_err());
    assert!(graph.add_edge_by_indices(0, 1, -1.0).is_err());
    assert!(graph.add_edge_by_vertices(&"x", &"z", 1.0).is_err());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_total_weight_is_additive() {
    let first = vec![WeightedEdge::new(0, 1, 1.5), WeightedEdge::new(1, 2, 2.5)];
    let second = vec![WeightedEdge::new(2, 3, 4.0)];
    let joined: Vec<WeightedEdge> = first.iter().chain(second.iter()).copied().collect();

    assert_eq!(total_weight(&[]), 0.0);
    assert_eq!(
        total_weight(&joined),
        total_weight(&first) + total_weight(&second)
    );
}

proptest! {
    #[test]
    fn prop_dijkstra_distances_are_relaxed(
        (n, edges) in graph_strategy(),
        root_seed in 0usize..6,
    ) {
        let root = root_seed % n;
        let graph = build(n, &edges);
        let result = graph.dijkstra_from_index(root).unwrap();

        prop_assert_eq!(result.distance_to(root), Some(0.0));
        // No edge offers a shortcut to an already-settled vertex
        for &(u, v, w) in &edges {
            prop_assert_eq!(result.is_reachable(u), result.is_reachable(v));
            if let (Some(du), Some(dv)) = (result.distance_to(u), result.distance_to(v)) {
                prop_assert!(dv <= du + w);
                prop_assert!(du <= dv + w);
            }
        }
        // Every reconstructed path costs exactly its recorded distance
        for end in 0..n {
            if let Some(distance) = result.distance_to(end) {
                prop_assert_eq!(total_weight(&result.path_to(end).unwrap()), distance);
            }
        }
    }

    #[test]
    fn prop_mst_spans_start_component_minimally(
        (n, edges) in graph_strategy(),
        start_seed in 0usize..6,
    ) {
        let start = start_seed % n;
        let graph = build(n, &edges);
        let tree = graph.mst(start);
        let component = component_of(&graph, start);

        prop_assert_eq!(tree.len(), component.len() - 1);
        prop_assert!(is_spanning_tree(n, &component, &tree), "not spanning: {:?}", tree);

        let best = brute_force_mst_weight(component.len(), &induced_edges(&component, &edges));
        prop_assert_eq!(Some(total_weight(&tree)), best);
    }
}

#[test]
fn test_mst_stays_in_start_component() {
    // Triangle 0-1-2, separate edge 3-4, isolated 5
    let edges = [(0, 1, 3.0), (1, 2, 1.0), (0, 2, 2.0), (3, 4, 7.0)];
    let graph = build(6, &edges);

    let tree = graph.mst(1);
    assert_eq!(tree.len(), 2);
    assert_eq!(total_weight(&tree), 3.0);
    assert!(is_spanning_tree(6, &[0, 1, 2], &tree));

    assert_eq!(graph.mst(4), vec![WeightedEdge::new(4, 3, 7.0)]);
    assert!(graph.mst(5).is_empty());
}

#[test]
fn test_mst_brute_force_on_diamond_component() {
    let edges = [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 4.0), (2, 3, 1.0)];
    let graph = build(4, &edges);
    for start in 0..4 {
        assert_eq!(
            Some(total_weight(&graph.mst(start))),
            brute_force_mst_weight(4, &edges)
        );
    }
}

// ============================================================================
// Breadth-first search over an unweighted graph
// ============================================================================

#[test]
fn test_bfs_over_graph_neighbors() {
    // 0 - 1 - 2 - 3 with a shortcut 0 - 3 and a pendant 4 on 2
    let mut graph = UnweightedGraph::new(vec![0u8, 1, 2, 3, 4]);
    for (u, v) in [(0, 1), (1, 2), (2, 3), (0, 3), (2, 4)] {
        graph.add_edge_by_indices(u, v).unwrap();
    }

    let tree = bfs(0u8, |v| *v == 4, graph.neighbor_fn()).unwrap();
    assert_eq!(tree.depth(), 3);
    assert_eq!(tree.path().first(), Some(&&0));
    assert_eq!(tree.path().last(), Some(&&4));

    let tree = bfs(1u8, |v| *v == 3, graph.neighbor_fn()).unwrap();
    assert_eq!(tree.depth(), 2);
}

#[test]
fn test_bfs_unknown_start_finds_nothing() {
    let graph = UnweightedGraph::new(vec!["only"]);
    assert!(bfs("elsewhere", |v| *v == "only", graph.neighbor_fn()).is_none());
}
