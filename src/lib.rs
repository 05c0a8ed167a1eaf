// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Cityroute library - shortest routes between cities
//!
//! This crate provides a weighted city graph loaded from `from,to,weight`
//! edge lists, a Dijkstra shortest-path engine over it, and the glue that
//! renders routes and benchmarks the engine on random graphs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod generate;
pub mod graph;
pub mod loader;
pub mod path;
pub mod render;

/// Core data types shared by the store, the engine and the collaborators
pub mod types {
    use serde::{Deserialize, Serialize};
    use std::fmt;

    /// Weight of a single edge. Unsigned, so negative weights cannot be stored.
    pub type Weight = u32;

    // =========================================================================
    // Edge Records
    // =========================================================================

    /// A logical edge between two cities, as read from an edge list
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct EdgeRecord {
        /// Source city
        pub from: String,
        /// Destination city
        pub to: String,
        /// Distance between the two cities
        pub weight: Weight,
    }

    impl EdgeRecord {
        /// Build an edge record from borrowed labels
        #[must_use]
        pub fn new(from: &str, to: &str, weight: Weight) -> Self {
            Self {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            }
        }
    }

    // =========================================================================
    // Distances
    // =========================================================================

    /// Accumulated route length.
    ///
    /// Serializes as a plain integer, or `null` when unreachable.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(untagged)]
    pub enum Distance {
        /// Sum of edge weights along a route
        Finite(u64),
        /// No route exists
        Unreachable,
    }

    impl Distance {
        /// Whether this distance belongs to an existing route
        #[must_use]
        pub fn is_reachable(&self) -> bool {
            matches!(self, Self::Finite(_))
        }

        /// The numeric distance, if reachable
        #[must_use]
        pub fn value(&self) -> Option<u64> {
            match self {
                Self::Finite(d) => Some(*d),
                Self::Unreachable => None,
            }
        }
    }

    impl From<Option<u64>> for Distance {
        fn from(value: Option<u64>) -> Self {
            value.map_or(Self::Unreachable, Self::Finite)
        }
    }

    impl fmt::Display for Distance {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Finite(d) => write!(f, "{d}"),
                Self::Unreachable => f.write_str("unreachable"),
            }
        }
    }

    // =========================================================================
    // Path Results
    // =========================================================================

    /// Outcome of a shortest-path query
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct PathResult {
        /// Cities from start to end, inclusive. Empty when there is no route.
        pub path: Vec<String>,
        /// Total weight of `path`
        pub distance: Distance,
    }

    impl PathResult {
        /// The "no route" result
        #[must_use]
        pub fn no_path() -> Self {
            Self {
                path: Vec::new(),
                distance: Distance::Unreachable,
            }
        }

        /// The zero-length route from a city to itself
        #[must_use]
        pub fn trivial(city: &str) -> Self {
            Self {
                path: vec![city.to_string()],
                distance: Distance::Finite(0),
            }
        }

        /// Whether a route was found
        #[must_use]
        pub fn is_found(&self) -> bool {
            self.distance.is_reachable()
        }

        /// Number of edges traversed by the route
        #[must_use]
        pub fn hops(&self) -> usize {
            self.path.len().saturating_sub(1)
        }
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::graph::CityGraph;
    pub use crate::loader::ParseMode;
    pub use crate::path::shortest_path;
    pub use crate::types::*;
    pub use anyhow::{Context, Result};
}
