// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed). The match limit
//! applies across all inputs, as in text output.

use std::io::Write;

use serde::Serialize;

use super::FormatOptions;
use crate::automaton::PatternId;
use crate::patterns::PatternSet;
use crate::scan::{ScanReport, ScanStats};

/// Top-level JSON document.
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    pub files: Vec<JsonFile>,
    pub total: usize,
    pub truncated: bool,
    pub stats: &'a ScanStats,
}

/// One input in JSON output.
#[derive(Debug, Serialize)]
pub struct JsonFile {
    pub path: String,
    pub count: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<JsonMatch>,
}

/// One match in JSON output.
#[derive(Debug, Serialize)]
pub struct JsonMatch {
    pub pattern: PatternId,
    pub text: String,
    pub line: u32,
    pub start: usize,
    pub end: usize,
}

impl<'a> JsonOutput<'a> {
    pub fn new(report: &'a ScanReport, patterns: &PatternSet, options: &FormatOptions) -> Self {
        let mut budget = options.limit.unwrap_or(usize::MAX);
        let mut truncated = false;

        let files = report
            .files
            .iter()
            .map(|file| {
                let matches = if options.count {
                    Vec::new()
                } else {
                    let shown = file.matches.len().min(budget);
                    truncated |= shown < file.matches.len();
                    budget -= shown;
                    file.matches[..shown]
                        .iter()
                        .map(|m| JsonMatch {
                            pattern: m.pattern,
                            text: patterns.display(m.pattern).into_owned(),
                            line: m.line,
                            start: m.start,
                            end: m.end,
                        })
                        .collect()
                };
                JsonFile {
                    path: file.path.display().to_string(),
                    count: file.matches.len(),
                    matches,
                }
            })
            .collect();

        Self {
            files,
            total: report.stats.total_matches,
            truncated,
            stats: &report.stats,
        }
    }
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON output.
    pub fn write(
        &mut self,
        report: &ScanReport,
        patterns: &PatternSet,
        options: &FormatOptions,
    ) -> std::io::Result<()> {
        let output = JsonOutput::new(report, patterns, options);
        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }

    /// Write any serializable value as pretty JSON.
    pub fn write_value<T: Serialize>(&mut self, value: &T) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
