// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern sets assembled from config, pattern files, and the command line.
//!
//! Sources are concatenated in a fixed order (config list, config files,
//! command-line files, inline patterns); a pattern's id is its index in the
//! combined list.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::automaton::{Automaton, PatternId};
use crate::config::PatternsConfig;
use crate::error::{Error, Result};

/// Ordered list of byte patterns.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<Vec<u8>>,
}

impl PatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gather patterns from every source in id order.
    pub fn from_sources(
        config: &PatternsConfig,
        files: &[PathBuf],
        inline: &[String],
    ) -> Result<Self> {
        let mut set = Self::new();
        set.extend(config.list.iter().map(String::as_bytes));
        for file in config.files.iter().chain(files) {
            let added = set.extend_from_file(file)?;
            tracing::debug!(path = %file.display(), added, "loaded pattern file");
        }
        set.extend(inline.iter().map(String::as_bytes));
        Ok(set)
    }

    pub fn push(&mut self, pattern: impl Into<Vec<u8>>) {
        self.patterns.push(pattern.into());
    }

    pub fn extend<I, P>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<Vec<u8>>,
    {
        self.patterns.extend(patterns.into_iter().map(Into::into));
    }

    /// Append the patterns in a file, returning how many were added.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize> {
        let bytes = std::fs::read(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let lines = parse_lines(&bytes);
        let added = lines.len();
        self.patterns.extend(lines);
        Ok(added)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn get(&self, id: PatternId) -> Option<&[u8]> {
        self.patterns.get(id.as_usize()).map(Vec::as_slice)
    }

    /// Pattern text for display; invalid UTF-8 is replaced.
    pub fn display(&self, id: PatternId) -> Cow<'_, str> {
        match self.get(id) {
            Some(bytes) => String::from_utf8_lossy(bytes),
            None => Cow::Borrowed(""),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.patterns.iter().map(Vec::as_slice)
    }

    /// Build the automaton for this set.
    pub fn build(&self) -> Automaton {
        Automaton::new(&self.patterns)
    }
}

/// Split pattern-file content into patterns: one per line, `\r\n` and `\n`
/// line endings, blank lines skipped.
pub fn parse_lines(content: &[u8]) -> Vec<Vec<u8>> {
    content
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(<[u8]>::to_vec)
        .collect()
}

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod tests;
