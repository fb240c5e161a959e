use std::path::PathBuf;

use ruta::config::GraphConfig;
use ruta::WeightedGraph;

/// Path to a file under tests/fixtures
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load the fifteen-city route map shipped with the tests
#[allow(dead_code)]
pub fn cities_config() -> GraphConfig {
    GraphConfig::load(&fixture_path("cities.toml")).expect("cities fixture should load")
}

/// The A-B(1), B-C(2), A-C(4), C-D(1) diamond with an isolated E
#[allow(dead_code)]
pub fn diamond() -> WeightedGraph<&'static str> {
    let mut graph = WeightedGraph::new(vec!["A", "B", "C", "D", "E"]);
    graph.add_edge_by_vertices(&"A", &"B", 1.0).unwrap();
    graph.add_edge_by_vertices(&"B", &"C", 2.0).unwrap();
    graph.add_edge_by_vertices(&"A", &"C", 4.0).unwrap();
    graph.add_edge_by_vertices(&"C", &"D", 1.0).unwrap();
    graph
}

/// Index of a city in the fixture's vertex list
#[allow(dead_code)]
pub fn city(config: &GraphConfig, name: &str) -> usize {
    config
        .vertices
        .iter()
        .position(|v| v == name)
        .unwrap_or_else(|| panic!("unknown city {}", name))
}
