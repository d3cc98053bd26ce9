// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan runner.
//!
//! Searches many inputs against one shared automaton. Files are searched in
//! parallel using rayon; an input that cannot be read (including one over
//! the size limit) is warned about and counted, and never aborts the rest of
//! the scan.

use std::collections::HashSet;
use std::io::Read;
use std::path::PathBuf;

use rayon::prelude::*;
use serde::Serialize;

use crate::automaton::{Automaton, PatternId};
use crate::reader::{FileReader, STDIN_NAME};
use crate::walker::WalkedFile;

/// A match resolved against its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoundMatch {
    pub pattern: PatternId,
    /// Byte offset of the first matched byte.
    pub start: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
    /// 1-based line holding `start`.
    pub line: u32,
}

/// Matches found in one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub matches: Vec<FoundMatch>,
}

/// Totals for a scan.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub files_failed: usize,
    pub total_matches: usize,
}

/// Result of scanning a set of inputs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// One entry per input with at least one match, in input order. With
    /// `ScanOptions::keep_empty`, every readable input gets an entry.
    pub files: Vec<FileReport>,
    pub stats: ScanStats,
}

impl ScanReport {
    pub fn has_matches(&self) -> bool {
        self.stats.total_matches > 0
    }

    /// Append another report, e.g. stdin after walked files.
    pub fn merge(&mut self, other: ScanReport) {
        self.files.extend(other.files);
        self.stats.files_scanned += other.stats.files_scanned;
        self.stats.files_failed += other.stats.files_failed;
        self.stats.total_matches += other.stats.total_matches;
    }
}

/// Scan options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Report each pattern at most once per input.
    pub unique: bool,
    /// Keep reports for inputs without matches (`--count`).
    pub keep_empty: bool,
}

/// Searches inputs against a shared automaton.
pub struct Scanner<'a> {
    automaton: &'a Automaton,
    reader: FileReader,
    options: ScanOptions,
}

impl<'a> Scanner<'a> {
    pub fn new(automaton: &'a Automaton, reader: FileReader, options: ScanOptions) -> Self {
        Self {
            automaton,
            reader,
            options,
        }
    }

    /// Search one buffer.
    pub fn scan_bytes(&self, text: &[u8]) -> Vec<FoundMatch> {
        let lines = LineIndex::new(text);
        let mut seen = HashSet::new();
        self.automaton
            .find_iter(text)
            .filter(|m| !self.options.unique || seen.insert(m.pattern))
            .map(|m| FoundMatch {
                pattern: m.pattern,
                start: m.start,
                end: m.end,
                line: lines.line_of(m.start),
            })
            .collect()
    }

    /// Search files in parallel.
    pub fn scan_files(&self, files: &[WalkedFile]) -> ScanReport {
        let results: Vec<Option<FileReport>> = files
            .par_iter()
            .map(|file| match self.reader.read(&file.path) {
                Ok(content) => Some(FileReport {
                    path: file.path.clone(),
                    matches: self.scan_bytes(&content.bytes),
                }),
                Err(e) => {
                    eprintln!("multimatch: warning: {}", e);
                    None
                }
            })
            .collect();

        let mut report = ScanReport::default();
        for result in results {
            match result {
                Some(file) => {
                    report.stats.files_scanned += 1;
                    report.stats.total_matches += file.matches.len();
                    if self.options.keep_empty || !file.matches.is_empty() {
                        report.files.push(file);
                    }
                }
                None => report.stats.files_failed += 1,
            }
        }

        tracing::debug!(
            scanned = report.stats.files_scanned,
            failed = report.stats.files_failed,
            matches = report.stats.total_matches,
            "scan complete"
        );

        report
    }

    /// Search standard input (or any reader) as a single buffer.
    pub fn scan_stream(&self, input: impl Read) -> ScanReport {
        let mut report = ScanReport::default();
        let content = match self.reader.read_stream(input) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("multimatch: warning: {}", e);
                report.stats.files_failed = 1;
                return report;
            }
        };

        let matches = self.scan_bytes(&content.bytes);
        report.stats.files_scanned = 1;
        report.stats.total_matches = matches.len();
        if self.options.keep_empty || !matches.is_empty() {
            report.files.push(FileReport {
                path: PathBuf::from(STDIN_NAME),
                matches,
            });
        }
        report
    }
}

/// Newline offsets of a buffer, for offset-to-line lookups.
pub struct LineIndex {
    newlines: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &[u8]) -> Self {
        Self {
            newlines: text
                .iter()
                .enumerate()
                .filter(|&(_, &b)| b == b'\n')
                .map(|(i, _)| i)
                .collect(),
        }
    }

    /// 1-based line number of a byte offset.
    pub fn line_of(&self, offset: usize) -> u32 {
        self.newlines.partition_point(|&nl| nl < offset) as u32 + 1
    }
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
