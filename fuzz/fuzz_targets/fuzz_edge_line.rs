// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
#![no_main]

use cityroute::loader::{parse_line, ParsedLine};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(ParsedLine::Edge(edge)) = parse_line(line) {
        assert!(!edge.from.is_empty());
        assert!(!edge.to.is_empty());
        assert_eq!(edge.from.trim(), edge.from);
        assert_eq!(edge.to.trim(), edge.to);
    }
});
