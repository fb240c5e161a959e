//! Generic breadth-first search
//!
//! [`bfs`] knows nothing about graphs: it explores states through a
//! successor function and records how each state was first reached. An
//! [`UnweightedGraph`](crate::graph::UnweightedGraph) supplies that
//! function through `neighbor_fn()`.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

#[derive(Debug, Clone)]
struct SearchNode<S> {
    state: S,
    parent: Option<usize>,
}

/// Parent back-pointers from a found goal state to the start state
#[derive(Debug, Clone)]
pub struct SearchTree<S> {
    nodes: Vec<SearchNode<S>>,
    goal: usize,
}

impl<S> SearchTree<S> {
    /// The state that satisfied the goal test
    pub fn goal(&self) -> &S {
        &self.nodes[self.goal].state
    }

    /// States from the start to the goal, both included
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        let mut current = Some(self.goal);
        while let Some(index) = current {
            let node = &self.nodes[index];
            path.push(&node.state);
            current = node.parent;
        }
        path.reverse();
        path
    }

    /// Number of steps between start and goal
    pub fn depth(&self) -> usize {
        self.path().len().saturating_sub(1)
    }

    /// States discovered before the search stopped, including the start
    pub fn discovered(&self) -> usize {
        self.nodes.len()
    }
}

/// Breadth-first search from `start` to the first state satisfying `goal`.
///
/// The goal test runs when a state is dequeued, so the start itself can be
/// the goal. Each state is expanded at most once. Returns `None` when the
/// reachable states are exhausted without meeting the goal.
pub fn bfs<S, G, N>(start: S, mut goal: G, mut successors: N) -> Option<SearchTree<S>>
where
    S: Clone + Eq + Hash,
    G: FnMut(&S) -> bool,
    N: FnMut(&S) -> Vec<S>,
{
    let mut explored: HashSet<S> = HashSet::new();
    explored.insert(start.clone());
    let mut nodes = vec![SearchNode {
        state: start,
        parent: None,
    }];
    let mut frontier: VecDeque<usize> = VecDeque::new();
    frontier.push_back(0);

    while let Some(current) = frontier.pop_front() {
        if goal(&nodes[current].state) {
            tracing::debug!(discovered = nodes.len(), "bfs reached goal");
            return Some(SearchTree {
                nodes,
                goal: current,
            });
        }

        for child in successors(&nodes[current].state) {
            if !explored.insert(child.clone()) {
                continue;
            }
            nodes.push(SearchNode {
                state: child,
                parent: Some(current),
            });
            frontier.push_back(nodes.len() - 1);
        }
    }

    tracing::debug!(explored = explored.len(), "bfs exhausted without reaching goal");
    None
}
