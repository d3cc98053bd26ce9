// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! ```text
//! <path>:<line>:<start>-<end>: <pattern>
//! ```
//!
//! With `--count`, one `<path>: <n>` line per input instead.

use std::io::Write;

use termcolor::WriteColor;

use super::FormatOptions;
use crate::color::scheme;
use crate::patterns::PatternSet;
use crate::scan::{FileReport, FoundMatch, ScanReport};

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
    options: FormatOptions,
    matches_shown: usize,
    truncated: bool,
}

impl<W: WriteColor> TextFormatter<W> {
    /// Create a new text formatter.
    pub fn new(out: W, options: FormatOptions) -> Self {
        Self {
            out,
            options,
            matches_shown: 0,
            truncated: false,
        }
    }

    /// Write a whole report, including the truncation notice.
    pub fn write_report(&mut self, report: &ScanReport, patterns: &PatternSet) -> std::io::Result<()> {
        for file in &report.files {
            if self.options.count {
                self.write_count(file)?;
            } else if self.write_file(file, patterns)? {
                break;
            }
        }
        self.write_truncation_message(report.stats.total_matches)
    }

    /// Write the matches of one input. Returns true if output was truncated.
    pub fn write_file(&mut self, file: &FileReport, patterns: &PatternSet) -> std::io::Result<bool> {
        for m in &file.matches {
            if let Some(limit) = self.options.limit
                && self.matches_shown >= limit
            {
                self.truncated = true;
                return Ok(true);
            }
            self.write_match(file, m, patterns)?;
            self.matches_shown += 1;
        }
        Ok(false)
    }

    fn write_match(
        &mut self,
        file: &FileReport,
        m: &FoundMatch,
        patterns: &PatternSet,
    ) -> std::io::Result<()> {
        self.out.set_color(&scheme::path())?;
        write!(self.out, "{}", file.path.display())?;
        self.out.reset()?;

        write!(self.out, ":")?;
        self.out.set_color(&scheme::line_number())?;
        write!(self.out, "{}", m.line)?;
        self.out.reset()?;

        write!(self.out, ":{}-{}: ", m.start, m.end)?;

        self.out.set_color(&scheme::pattern())?;
        write!(self.out, "{}", patterns.display(m.pattern))?;
        self.out.reset()?;
        writeln!(self.out)
    }

    fn write_count(&mut self, file: &FileReport) -> std::io::Result<()> {
        self.out.set_color(&scheme::path())?;
        write!(self.out, "{}", file.path.display())?;
        self.out.reset()?;
        writeln!(self.out, ": {}", file.matches.len())
    }

    /// Write truncation message if applicable.
    pub fn write_truncation_message(&mut self, total: usize) -> std::io::Result<()> {
        if let Some(limit) = self.options.limit
            && self.truncated
            && total > limit
        {
            writeln!(
                self.out,
                "Stopped after {} of {} matches. Use --no-limit to see all.",
                limit, total
            )?;
        }
        Ok(())
    }

    /// Check if output was truncated.
    pub fn was_truncated(&self) -> bool {
        self.truncated
    }

    /// Get the number of matches shown.
    pub fn matches_shown(&self) -> usize {
        self.matches_shown
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
