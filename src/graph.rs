// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Graph store: cities and their outgoing weighted edges

use crate::path;
use crate::types::{EdgeRecord, PathResult, Weight};
use anyhow::{Context, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::Serialize;
use std::collections::HashMap;

/// An outgoing edge as seen from its source city
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Neighbor<'a> {
    /// Destination city
    pub to: &'a str,
    /// Edge weight
    pub weight: Weight,
}

/// The city graph with petgraph backing for algorithms.
///
/// Every edge is stored as a directed record. In undirected mode each
/// logical edge is inserted as two consecutive records, `from -> to` then
/// `to -> from`, so record `2k` is always the forward half of logical edge `k`.
#[derive(Debug, Clone)]
pub struct CityGraph {
    /// The underlying directed graph, weighted by distance
    graph: DiGraph<String, Weight>,
    /// Map from city label to node index
    node_indices: HashMap<String, NodeIndex>,
    /// Fixed at construction
    directed: bool,
}

impl CityGraph {
    /// Create an empty graph
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
            directed,
        }
    }

    /// Create an empty directed graph
    #[must_use]
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create an empty undirected graph
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Add a city. Adding an existing city is a no-op.
    pub fn add_node(&mut self, city: &str) {
        self.ensure_node(city);
    }

    fn ensure_node(&mut self, city: &str) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(city) {
            return idx;
        }
        let idx = self.graph.add_node(city.to_string());
        self.node_indices.insert(city.to_string(), idx);
        idx
    }

    /// Add an edge, creating either endpoint if needed.
    ///
    /// Undirected graphs also get the reverse record with the same weight.
    /// Parallel edges and self-loops are kept as given.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Weight) {
        let from_idx = self.ensure_node(from);
        let to_idx = self.ensure_node(to);

        self.graph.add_edge(from_idx, to_idx, weight);
        if !self.directed {
            self.graph.add_edge(to_idx, from_idx, weight);
        }
    }

    /// Add an edge of weight 1
    pub fn add_unit_edge(&mut self, from: &str, to: &str) {
        self.add_edge(from, to, 1);
    }

    /// Outgoing edges of `city` in insertion order; empty for unknown cities
    #[must_use]
    pub fn neighbors(&self, city: &str) -> Vec<Neighbor<'_>> {
        let Some(&idx) = self.node_indices.get(city) else {
            return Vec::new();
        };

        // petgraph walks a node's edge list newest first
        let mut out: Vec<_> = self
            .graph
            .edges(idx)
            .map(|e| Neighbor {
                to: self.graph[e.target()].as_str(),
                weight: *e.weight(),
            })
            .collect();
        out.reverse();
        out
    }

    /// Find the shortest route between two cities
    #[must_use]
    pub fn shortest_path(&self, from: &str, to: &str) -> PathResult {
        path::shortest_path(self, from, to)
    }

    /// Check whether a city is known
    #[must_use]
    pub fn contains(&self, city: &str) -> bool {
        self.node_indices.contains_key(city)
    }

    /// Whether edges are one-way
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// All city labels, in the order they were first seen
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.node_weights().map(String::as_str)
    }

    /// Logical edges in insertion order (one per `add_edge` call)
    pub fn edges(&self) -> impl Iterator<Item = EdgeRecord> + '_ {
        let stride = if self.directed { 1 } else { 2 };
        self.graph.edge_references().step_by(stride).map(|e| {
            EdgeRecord::new(&self.graph[e.source()], &self.graph[e.target()], *e.weight())
        })
    }

    /// Get node count
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of directed edge records
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Get the number of `add_edge` calls the graph has absorbed
    #[must_use]
    pub fn logical_edge_count(&self) -> usize {
        if self.directed {
            self.graph.edge_count()
        } else {
            self.graph.edge_count() / 2
        }
    }

    /// Check if the graph is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub(crate) fn index_of(&self, city: &str) -> Option<NodeIndex> {
        self.node_indices.get(city).copied()
    }

    pub(crate) fn inner(&self) -> &DiGraph<String, Weight> {
        &self.graph
    }

    /// Export to DOT format for Graphviz
    #[must_use]
    pub fn to_dot(&self) -> String {
        let (keyword, arrow) = if self.directed {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        let mut dot = format!("{keyword} cities {{\n");
        dot.push_str("  node [shape=ellipse];\n\n");

        for city in self.nodes() {
            dot.push_str(&format!("  \"{}\";\n", escape_dot(city)));
        }

        dot.push('\n');

        for edge in self.edges() {
            dot.push_str(&format!(
                "  \"{}\" {} \"{}\" [label=\"{}\"];\n",
                escape_dot(&edge.from),
                arrow,
                escape_dot(&edge.to),
                edge.weight
            ));
        }

        dot.push_str("}\n");
        dot
    }

    /// Export to JSON
    pub fn to_json(&self) -> Result<String> {
        #[derive(Serialize)]
        struct GraphExport<'a> {
            directed: bool,
            nodes: Vec<&'a str>,
            edges: Vec<EdgeRecord>,
        }

        let export = GraphExport {
            directed: self.directed,
            nodes: self.nodes().collect(),
            edges: self.edges().collect(),
        };
        serde_json::to_string_pretty(&export).context("Failed to serialize graph to JSON")
    }
}

impl Extend<EdgeRecord> for CityGraph {
    fn extend<I: IntoIterator<Item = EdgeRecord>>(&mut self, iter: I) {
        for edge in iter {
            self.add_edge(&edge.from, &edge.to, edge.weight);
        }
    }
}

fn escape_dot(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
