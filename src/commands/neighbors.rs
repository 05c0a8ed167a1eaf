// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Neighbors command - list the outgoing edges of a city

use super::{load_graph, GraphSource, Output};
use anyhow::{Context, Result};

/// Run the neighbors command
pub fn run(source: &GraphSource, city: &str, output: Output) -> Result<()> {
    let graph = load_graph(source)?;
    let neighbors = graph.neighbors(city);

    if output.json {
        let json = serde_json::to_string_pretty(&neighbors)
            .context("Failed to serialize neighbors")?;
        println!("{json}");
        return Ok(());
    }

    if !graph.contains(city) {
        println!("{city} is not in the graph");
        return Ok(());
    }

    if neighbors.is_empty() {
        println!("{city} has no outgoing edges");
        return Ok(());
    }

    println!("Edges from {} ({}):", city, neighbors.len());
    for n in &neighbors {
        println!("  {} -> {} [{}]", city, n.to, n.weight);
    }

    Ok(())
}
