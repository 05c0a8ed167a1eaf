// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Edge list loading
//!
//! Reads `from,to,weight` lines into a [`CityGraph`]. Fields are trimmed.
//! Blank lines and `#` comments are ignored, and lines that do not have
//! exactly three fields (not counting trailing empty ones) are skipped.
//! What happens to a malformed record depends on the [`ParseMode`].

use crate::graph::CityGraph;
use crate::types::{EdgeRecord, Weight};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// How malformed records are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Abort the whole load on the first malformed record
    #[default]
    Strict,
    /// Skip malformed records with a warning
    Lenient,
}

impl ParseMode {
    /// Pick a mode from a `strict` flag
    #[must_use]
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

/// Why a single record was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Weight field is not an integer
    #[error("weight `{0}` is not an integer")]
    InvalidWeight(String),

    /// Weight field is below zero
    #[error("weight {0} is negative")]
    NegativeWeight(i64),

    /// Weight field does not fit a [`Weight`]
    #[error("weight {0} exceeds the maximum of {max}", max = Weight::MAX)]
    WeightOutOfRange(i64),

    /// `from` or `to` is blank
    #[error("city label is empty")]
    EmptyLabel,

    /// Line is not valid UTF-8
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

/// Errors from loading an edge list
#[derive(Error, Debug)]
pub enum LoadError {
    /// A record was rejected in strict mode
    #[error("malformed record on line {line}")]
    Record {
        /// 1-based line number
        line: usize,
        /// What was wrong with it
        #[source]
        source: RecordError,
    },

    /// The edge list file could not be opened
    #[error("failed to open {}", path.display())]
    Open {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reading failed part way through
    #[error("failed to read edge list")]
    Io(#[from] std::io::Error),
}

/// Classification of one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// A well-formed edge
    Edge(EdgeRecord),
    /// Empty or comment line
    Blank,
    /// Line with the given number of fields instead of three
    WrongFieldCount(usize),
}

/// What a load did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Edges added to the graph
    pub edges: usize,
    /// Lines skipped for having the wrong number of fields
    pub skipped: usize,
    /// Malformed records dropped in lenient mode
    pub rejected: usize,
}

/// Parse a single line.
///
/// # Errors
///
/// Returns a [`RecordError`] for a three-field line whose labels or weight
/// are unusable.
pub fn parse_line(line: &str) -> Result<ParsedLine, RecordError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(ParsedLine::Blank);
    }

    let mut fields: Vec<&str> = line.split(',').map(str::trim).collect();
    // Trailing empty fields do not count: `A,B,1,` is an edge, `A,B,` has two fields
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    let [from, to, weight] = fields.as_slice() else {
        return Ok(ParsedLine::WrongFieldCount(fields.len()));
    };

    if from.is_empty() || to.is_empty() {
        return Err(RecordError::EmptyLabel);
    }

    let weight = parse_weight(weight)?;
    Ok(ParsedLine::Edge(EdgeRecord::new(from, to, weight)))
}

fn parse_weight(raw: &str) -> Result<Weight, RecordError> {
    let value: i64 = raw
        .parse()
        .map_err(|_| RecordError::InvalidWeight(raw.to_string()))?;
    if value < 0 {
        return Err(RecordError::NegativeWeight(value));
    }
    Weight::try_from(value).map_err(|_| RecordError::WeightOutOfRange(value))
}

/// Load edges from a reader into `graph`.
///
/// The graph is only touched once every line has been read, so a failed
/// strict load leaves it exactly as it was.
///
/// # Errors
///
/// Fails on I/O errors, and on the first malformed record in strict mode.
pub fn load_reader<R: BufRead>(
    graph: &mut CityGraph,
    mut reader: R,
    mode: ParseMode,
) -> Result<LoadReport, LoadError> {
    let mut report = LoadReport::default();
    let mut records = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let parsed = std::str::from_utf8(raw)
            .map_err(|_| RecordError::InvalidUtf8)
            .and_then(parse_line);

        match parsed {
            Ok(ParsedLine::Edge(edge)) => records.push(edge),
            Ok(ParsedLine::Blank) => {}
            Ok(ParsedLine::WrongFieldCount(n)) => {
                debug!("Skipping line {line_no}: expected 3 fields, found {n}");
                report.skipped += 1;
            }
            Err(source) => match mode {
                ParseMode::Strict => {
                    return Err(LoadError::Record {
                        line: line_no,
                        source,
                    })
                }
                ParseMode::Lenient => {
                    warn!("Dropping line {line_no}: {source}");
                    report.rejected += 1;
                }
            },
        }
    }

    report.edges = records.len();
    graph.extend(records);
    Ok(report)
}

/// Load edges from an in-memory string
///
/// # Errors
///
/// See [`load_reader`].
pub fn load_str(graph: &mut CityGraph, input: &str, mode: ParseMode) -> Result<LoadReport, LoadError> {
    load_reader(graph, input.as_bytes(), mode)
}

/// Load edges from a file
///
/// # Errors
///
/// Fails if the file cannot be opened, otherwise see [`load_reader`].
pub fn load_path(graph: &mut CityGraph, path: &Path, mode: ParseMode) -> Result<LoadReport, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(graph, BufReader::new(file), mode)
}
