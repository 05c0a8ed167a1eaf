// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Dijkstra shortest-path search over a [`CityGraph`]
//!
//! Each query owns its distance table, predecessor table, finalized set and
//! frontier. The graph is only borrowed, so any number of queries may run
//! against the same graph, including from several threads at once.

use crate::graph::CityGraph;
use crate::types::{Distance, PathResult};
use petgraph::graph::NodeIndex;
use petgraph::visit::{EdgeRef, VisitMap, Visitable};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Find the shortest route from `start` to `end`.
///
/// Unknown cities are not an error: they simply have no route to anything
/// but themselves. A city always reaches itself with distance 0.
#[must_use]
pub fn shortest_path(graph: &CityGraph, start: &str, end: &str) -> PathResult {
    if start == end {
        return PathResult::trivial(start);
    }

    let (Some(source), Some(target)) = (graph.index_of(start), graph.index_of(end)) else {
        return PathResult::no_path();
    };

    let search = Search::run(graph, source, target);
    let Some(distance) = search.dist[target.index()] else {
        return PathResult::no_path();
    };

    let inner = graph.inner();
    PathResult {
        path: search
            .route(source, target)
            .into_iter()
            .map(|idx| inner[idx].clone())
            .collect(),
        distance: Distance::Finite(distance),
    }
}

/// Per-query working state
struct Search {
    /// Best known distance per node; `None` means not reached
    dist: Vec<Option<u64>>,
    /// Predecessor on the best known route
    prev: Vec<Option<NodeIndex>>,
}

impl Search {
    fn run(graph: &CityGraph, source: NodeIndex, target: NodeIndex) -> Self {
        let inner = graph.inner();
        let n = inner.node_count();

        let mut dist = vec![None; n];
        let mut prev = vec![None; n];
        let mut finalized = inner.visit_map();
        let mut frontier = BinaryHeap::new();

        dist[source.index()] = Some(0u64);
        frontier.push(Reverse((0u64, source)));

        while let Some(Reverse((d, node))) = frontier.pop() {
            // A node is popped once per improvement; only the first pop counts.
            if !finalized.visit(node) {
                continue;
            }

            if node == target {
                break;
            }

            for edge in inner.edges(node) {
                let next = edge.target();
                let Some(candidate) = d.checked_add(u64::from(*edge.weight())) else {
                    continue;
                };

                if dist[next.index()].map_or(true, |best| candidate < best) {
                    dist[next.index()] = Some(candidate);
                    prev[next.index()] = Some(node);
                    frontier.push(Reverse((candidate, next)));
                }
            }
        }

        Self { dist, prev }
    }

    /// Walk predecessors back from `target`. Only meaningful once `target`
    /// has a distance.
    fn route(&self, source: NodeIndex, target: NodeIndex) -> Vec<NodeIndex> {
        let mut route = vec![target];
        let mut current = target;

        while current != source {
            match self.prev[current.index()] {
                Some(p) => {
                    route.push(p);
                    current = p;
                }
                None => break,
            }
        }

        route.reverse();
        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(result: &PathResult) -> Vec<&str> {
        result.path.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_prefers_cheaper_detour() {
        let mut graph = CityGraph::undirected();
        graph.add_edge("A", "B", 1);
        graph.add_edge("B", "C", 2);
        graph.add_edge("A", "C", 5);

        let result = shortest_path(&graph, "A", "C");

        assert_eq!(labels(&result), vec!["A", "B", "C"]);
        assert_eq!(result.distance, Distance::Finite(3));
    }

    #[test]
    fn test_directed_edge_is_one_way() {
        let mut graph = CityGraph::directed();
        graph.add_edge("A", "B", 1);

        assert_eq!(shortest_path(&graph, "A", "B").distance, Distance::Finite(1));
        assert_eq!(shortest_path(&graph, "B", "A"), PathResult::no_path());
    }

    #[test]
    fn test_parallel_edges_pick_minimum() {
        let mut graph = CityGraph::undirected();
        graph.add_edge("A", "B", 4);
        graph.add_edge("A", "B", 2);

        let result = shortest_path(&graph, "A", "B");
        assert_eq!(labels(&result), vec!["A", "B"]);
        assert_eq!(result.distance, Distance::Finite(2));
    }

    #[test]
    fn test_empty_graph() {
        let graph = CityGraph::undirected();
        assert_eq!(shortest_path(&graph, "A", "B"), PathResult::no_path());
    }

    #[test]
    fn test_same_city_is_trivial_route() {
        let mut graph = CityGraph::undirected();
        graph.add_edge("A", "B", 3);

        assert_eq!(shortest_path(&graph, "A", "A"), PathResult::trivial("A"));
        // Also holds for cities the graph has never seen
        assert_eq!(shortest_path(&graph, "Z", "Z"), PathResult::trivial("Z"));
    }

    #[test]
    fn test_unknown_start_or_end() {
        let mut graph = CityGraph::undirected();
        graph.add_edge("A", "B", 3);

        assert!(!shortest_path(&graph, "X", "A").is_found());
        assert!(!shortest_path(&graph, "A", "X").is_found());
    }

    #[test]
    fn test_disconnected_components() {
        let mut graph = CityGraph::undirected();
        graph.add_edge("A", "B", 1);
        graph.add_edge("C", "D", 1);

        let result = shortest_path(&graph, "A", "D");
        assert!(result.path.is_empty());
        assert_eq!(result.distance, Distance::Unreachable);
    }

    #[test]
    fn test_zero_weight_edges() {
        let mut graph = CityGraph::directed();
        graph.add_edge("A", "B", 0);
        graph.add_edge("B", "C", 0);
        graph.add_edge("A", "C", 1);

        let result = shortest_path(&graph, "A", "C");
        assert_eq!(labels(&result), vec!["A", "B", "C"]);
        assert_eq!(result.distance, Distance::Finite(0));
    }

    #[test]
    fn test_stale_frontier_entries_are_skipped() {
        // B is pushed at 10, then improved to 2 via C; the stale entry must
        // not overwrite D's route.
        let mut graph = CityGraph::directed();
        graph.add_edge("A", "B", 10);
        graph.add_edge("A", "C", 1);
        graph.add_edge("C", "B", 1);
        graph.add_edge("B", "D", 1);

        let result = shortest_path(&graph, "A", "D");
        assert_eq!(labels(&result), vec!["A", "C", "B", "D"]);
        assert_eq!(result.distance, Distance::Finite(3));
    }

    #[test]
    fn test_large_weights_do_not_wrap() {
        let mut graph = CityGraph::directed();
        let mut prev = String::from("N0");
        for i in 1..=4 {
            let next = format!("N{i}");
            graph.add_edge(&prev, &next, u32::MAX);
            prev = next;
        }

        let result = shortest_path(&graph, "N0", "N4");
        assert_eq!(result.distance, Distance::Finite(4 * u64::from(u32::MAX)));
        assert_eq!(result.hops(), 4);
    }

    #[test]
    fn test_self_loop_is_harmless() {
        let mut graph = CityGraph::directed();
        graph.add_edge("A", "A", 1);
        graph.add_edge("A", "B", 2);

        assert_eq!(shortest_path(&graph, "A", "B").distance, Distance::Finite(2));
    }
}
