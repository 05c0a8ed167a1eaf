// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
#![no_main]

use arbitrary::Arbitrary;
use cityroute::graph::CityGraph;
use cityroute::loader::{self, ParseMode};
use cityroute::types::Distance;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct RouteInput<'a> {
    csv: &'a str,
    directed: bool,
    from: &'a str,
    to: &'a str,
}

fuzz_target!(|input: RouteInput<'_>| {
    let mut graph = CityGraph::new(input.directed);
    if loader::load_str(&mut graph, input.csv, ParseMode::Lenient).is_err() {
        return;
    }

    let result = graph.shortest_path(input.from, input.to);
    match result.distance {
        Distance::Unreachable => assert!(result.path.is_empty()),
        Distance::Finite(_) => {
            assert_eq!(result.path.first().map(String::as_str), Some(input.from));
            assert_eq!(result.path.last().map(String::as_str), Some(input.to));
        }
    }
});
