// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Random city graphs for benchmarking the engine

use crate::graph::CityGraph;
use crate::types::Weight;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Parameters for a random graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of cities
    pub cities: usize,
    /// Number of edge insertion attempts; self-loops are discarded
    pub edges: usize,
    /// Weights are drawn uniformly from `1..=max_weight`
    pub max_weight: Weight,
    /// Build a directed graph
    pub directed: bool,
    /// Fixed seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            cities: 100_000,
            edges: 1_000_000,
            max_weight: 1000,
            directed: false,
            seed: None,
        }
    }
}

/// Label for the `i`-th generated city, counting from zero: `C00001`, `C00002`, ...
#[must_use]
pub fn city_label(i: usize) -> String {
    format!("C{:05}", i + 1)
}

/// Random graph builder that can also pick random query endpoints
pub struct Generator {
    config: GeneratorConfig,
    cities: Vec<String>,
    rng: StdRng,
}

impl Generator {
    /// Create a generator and its city labels
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let cities = (0..config.cities).map(city_label).collect();
        Self { config, cities, rng }
    }

    /// Generated city labels
    #[must_use]
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Build a graph from random edges between the generated cities.
    ///
    /// Cities that end up with no edges are not part of the graph.
    pub fn build_graph(&mut self) -> CityGraph {
        let mut graph = CityGraph::new(self.config.directed);
        if self.cities.is_empty() {
            return graph;
        }

        let max_weight = self.config.max_weight.max(1);
        let mut self_loops = 0usize;

        for _ in 0..self.config.edges {
            let from = self.rng.gen_range(0..self.cities.len());
            let to = self.rng.gen_range(0..self.cities.len());
            if from == to {
                self_loops += 1;
                continue;
            }

            let weight = self.rng.gen_range(1..=max_weight);
            graph.add_edge(&self.cities[from], &self.cities[to], weight);
        }

        debug!(
            "Generated {} cities, {} edges ({} self-loops discarded)",
            graph.node_count(),
            graph.logical_edge_count(),
            self_loops
        );
        graph
    }

    /// Pick a random (start, end) pair; the two may coincide
    pub fn random_pair(&mut self) -> Option<(&str, &str)> {
        if self.cities.is_empty() {
            return None;
        }
        let start = self.rng.gen_range(0..self.cities.len());
        let end = self.rng.gen_range(0..self.cities.len());
        Some((&self.cities[start], &self.cities[end]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(seed: u64) -> GeneratorConfig {
        GeneratorConfig {
            cities: 50,
            edges: 400,
            max_weight: 20,
            directed: false,
            seed: Some(seed),
        }
    }

    #[test]
    fn test_city_label_padding() {
        assert_eq!(city_label(0), "C00001");
        assert_eq!(city_label(99_999), "C100000");
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = Generator::new(small(7)).build_graph();
        let b = Generator::new(small(7)).build_graph();

        assert_eq!(a.edges().collect::<Vec<_>>(), b.edges().collect::<Vec<_>>());
    }

    #[test]
    fn test_no_self_loops_and_weights_in_range() {
        let graph = Generator::new(small(3)).build_graph();

        for edge in graph.edges() {
            assert_ne!(edge.from, edge.to);
            assert!((1..=20).contains(&edge.weight));
        }
        assert!(graph.logical_edge_count() <= 400);
    }

    #[test]
    fn test_directed_flag_is_respected() {
        let config = GeneratorConfig {
            directed: true,
            ..small(1)
        };
        let graph = Generator::new(config).build_graph();

        assert!(graph.is_directed());
        assert_eq!(graph.edge_count(), graph.logical_edge_count());
    }

    #[test]
    fn test_empty_city_set() {
        let mut generator = Generator::new(GeneratorConfig {
            cities: 0,
            ..small(1)
        });

        assert!(generator.build_graph().is_empty());
        assert!(generator.random_pair().is_none());
    }

    #[test]
    fn test_random_pair_uses_generated_labels() {
        let mut generator = Generator::new(small(11));
        let (start, end) = generator.random_pair().unwrap();

        assert!(start.starts_with('C'));
        assert!(end.starts_with('C'));
    }
}
