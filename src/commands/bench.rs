// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Bench command - time shortest-path queries on a random graph

use super::Output;
use crate::generate::{Generator, GeneratorConfig};
use crate::graph::CityGraph;
use anyhow::{Context, Result};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::info;

/// One timed query
#[derive(Debug, Clone, Serialize)]
pub struct QueryTiming {
    /// Start city
    pub start: String,
    /// Destination city
    pub end: String,
    /// Cities on the route; 0 when none was found
    pub path_len: usize,
    /// Wall time in milliseconds
    pub millis: u128,
}

impl QueryTiming {
    /// A query succeeds when it finds a route of at least one edge
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.path_len > 1
    }
}

/// Results of a benchmark run
#[derive(Debug, Clone, Serialize)]
pub struct BenchSummary {
    /// Cities in the generated graph
    pub cities: usize,
    /// Directed edge records in the generated graph
    pub edge_records: usize,
    /// Per-query timings in run order
    pub queries: Vec<QueryTiming>,
    /// Queries that found a route
    pub successful: usize,
    /// Mean wall time per query in milliseconds
    pub average_millis: u128,
}

/// Run `count` random queries against `graph`
pub fn run_queries(graph: &CityGraph, generator: &mut Generator, count: usize) -> BenchSummary {
    let mut queries = Vec::with_capacity(count);
    let mut total = Duration::ZERO;

    for _ in 0..count {
        let Some((start, end)) = generator.random_pair() else {
            break;
        };

        let began = Instant::now();
        let result = graph.shortest_path(start, end);
        let elapsed = began.elapsed();
        total += elapsed;

        queries.push(QueryTiming {
            start: start.to_string(),
            end: end.to_string(),
            path_len: result.path.len(),
            millis: elapsed.as_millis(),
        });
    }

    let successful = queries.iter().filter(|q| q.succeeded()).count();
    let average_millis = if queries.is_empty() {
        0
    } else {
        total.as_millis() / queries.len() as u128
    };

    BenchSummary {
        cities: graph.node_count(),
        edge_records: graph.edge_count(),
        queries,
        successful,
        average_millis,
    }
}

/// Run the bench command
pub fn run(config: GeneratorConfig, queries: usize, output: Output) -> Result<()> {
    info!(
        "Generating {} graph: {} cities, {} edges",
        if config.directed { "directed" } else { "undirected" },
        config.cities,
        config.edges
    );

    let mut generator = Generator::new(config);
    let began = Instant::now();
    let graph = generator.build_graph();
    info!("Graph built in {} ms", began.elapsed().as_millis());

    let summary = run_queries(&graph, &mut generator, queries);

    if output.json {
        let json = serde_json::to_string_pretty(&summary)
            .context("Failed to serialize benchmark summary")?;
        println!("{json}");
        return Ok(());
    }

    for (i, q) in summary.queries.iter().enumerate() {
        if q.succeeded() {
            println!(
                "Query {}: {} -> {} | Path Length: {} | Time: {} ms",
                i + 1,
                q.start,
                q.end,
                q.path_len,
                q.millis
            );
        } else {
            println!("Query {}: {} -> {} | No path found", i + 1, q.start, q.end);
        }
    }

    println!();
    println!("Summary:");
    println!("Total Queries: {}", summary.queries.len());
    println!("Successful Paths: {}", summary.successful);
    println!("Average Time per Query: {} ms", summary.average_millis);

    Ok(())
}
