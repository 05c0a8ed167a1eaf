// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Route command - shortest route between two cities

use super::{load_graph, GraphSource, Output};
use crate::render::{self, Style};
use anyhow::Result;
use tracing::debug;

/// Run the route command
pub fn run(source: &GraphSource, from: &str, to: &str, separator: &str, output: Output) -> Result<()> {
    let graph = load_graph(source)?;

    if !graph.contains(from) {
        debug!("Start city {} is not in the graph", from);
    }
    if !graph.contains(to) {
        debug!("Destination city {} is not in the graph", to);
    }

    let result = graph.shortest_path(from, to);

    if output.json {
        println!("{}", render::render_json(from, to, &result)?);
    } else {
        let style = Style {
            separator: separator.to_string(),
            color: output.color,
        };
        println!("{}", render::render_text(from, to, &result, &style));
    }

    Ok(())
}
