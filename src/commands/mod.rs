// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod bench;
pub mod completions;
pub mod config;
pub mod export;
pub mod neighbors;
pub mod route;

use crate::graph::CityGraph;
use crate::loader::{self, ParseMode};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

/// Output options shared by every command
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    /// Print JSON instead of text
    pub json: bool,
    /// Emit ANSI colors in text output
    pub color: bool,
}

/// Where and how to load an edge list
#[derive(Debug, Clone)]
pub struct GraphSource {
    /// CSV file of `from,to,weight` lines
    pub csv: PathBuf,
    /// Build a directed graph
    pub directed: bool,
    /// Strictness for malformed records
    pub mode: ParseMode,
}

/// Load the edge list described by `source`
pub fn load_graph(source: &GraphSource) -> Result<CityGraph> {
    let mut graph = CityGraph::new(source.directed);
    let report = loader::load_path(&mut graph, &source.csv, source.mode)
        .with_context(|| format!("Failed to load edges from {}", source.csv.display()))?;

    info!(
        "Loaded {} edges between {} cities from {}",
        report.edges,
        graph.node_count(),
        source.csv.display()
    );
    if report.skipped > 0 || report.rejected > 0 {
        info!(
            "Ignored {} lines with the wrong field count and {} malformed records",
            report.skipped, report.rejected
        );
    }

    Ok(graph)
}
