// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Route presentation

use crate::types::{Distance, PathResult};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Separator placed between cities when none is configured
pub const DEFAULT_SEPARATOR: &str = " -> ";

/// Formatting options for routes
#[derive(Debug, Clone)]
pub struct Style {
    /// Placed between consecutive cities
    pub separator: String,
    /// Emit ANSI colors
    pub color: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            color: false,
        }
    }
}

/// Join the cities of a route with `separator`
#[must_use]
pub fn route_line(result: &PathResult, separator: &str) -> String {
    result.path.join(separator)
}

/// Human-readable report for a query from `from` to `to`
#[must_use]
pub fn render_text(from: &str, to: &str, result: &PathResult, style: &Style) -> String {
    let route = if result.is_found() {
        route_line(result, &style.separator)
    } else {
        format!("no route from {from} to {to}")
    };
    let mut distance = result.distance.to_string();

    let route = match (style.color, result.distance) {
        (false, _) => route,
        (true, Distance::Finite(_)) => {
            distance = distance.bold().to_string();
            route.green().to_string()
        }
        (true, Distance::Unreachable) => {
            distance = distance.red().to_string();
            route.yellow().to_string()
        }
    };

    format!("Shortest route: {route}\nShortest distance: {distance}")
}

/// JSON report for a query
///
/// # Errors
///
/// Fails only if serialization fails.
pub fn render_json(from: &str, to: &str, result: &PathResult) -> Result<String> {
    #[derive(Serialize)]
    struct RouteReport<'a> {
        from: &'a str,
        to: &'a str,
        found: bool,
        path: &'a [String],
        distance: Distance,
    }

    let report = RouteReport {
        from,
        to,
        found: result.is_found(),
        path: &result.path,
        distance: result.distance,
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize route to JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found() -> PathResult {
        PathResult {
            path: vec!["Q".into(), "W".into(), "I".into()],
            distance: Distance::Finite(7),
        }
    }

    #[test]
    fn test_route_line() {
        assert_eq!(route_line(&found(), DEFAULT_SEPARATOR), "Q -> W -> I");
        assert_eq!(route_line(&found(), ","), "Q,W,I");
        assert_eq!(route_line(&PathResult::no_path(), DEFAULT_SEPARATOR), "");
    }

    #[test]
    fn test_render_text_found() {
        let text = render_text("Q", "I", &found(), &Style::default());
        assert_eq!(text, "Shortest route: Q -> W -> I\nShortest distance: 7");
    }

    #[test]
    fn test_render_text_unreachable() {
        let text = render_text("Q", "Z", &PathResult::no_path(), &Style::default());
        assert_eq!(
            text,
            "Shortest route: no route from Q to Z\nShortest distance: unreachable"
        );
    }

    #[test]
    fn test_render_text_color_keeps_content() {
        let style = Style {
            color: true,
            ..Style::default()
        };
        let text = render_text("Q", "I", &found(), &style);
        assert!(text.contains('\u{1b}'));
        assert!(text.contains("Q -> W -> I"));
    }

    #[test]
    fn test_render_json() {
        let json: serde_json::Value =
            serde_json::from_str(&render_json("Q", "I", &found()).unwrap()).unwrap();
        assert_eq!(json["found"], true);
        assert_eq!(json["distance"], 7);
        assert_eq!(json["path"], serde_json::json!(["Q", "W", "I"]));

        let json: serde_json::Value =
            serde_json::from_str(&render_json("Q", "Z", &PathResult::no_path()).unwrap()).unwrap();
        assert_eq!(json["found"], false);
        assert!(json["distance"].is_null());
    }
}
