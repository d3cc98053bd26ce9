// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File discovery with gitignore support.
//!
//! Uses the `ignore` crate to expand scan roots into files, respecting
//! `.gitignore`, hidden-file rules, depth limits, and the size limit.
//! Files given explicitly as roots are always included, whatever their size,
//! so the reader reports them by name when they exceed the limit.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Default maximum directory depth.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Directories to skip entirely during walking.
pub(crate) const SKIP_DIRECTORIES: &[&str] = &[".git"];

/// Helper to check if an ignore::Error is a symlink loop error.
fn is_loop_error(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. } => is_loop_error(err),
        ignore::Error::WithDepth { err, .. } => is_loop_error(err),
        ignore::Error::WithLineNumber { err, .. } => is_loop_error(err),
        _ => false,
    }
}

/// Walker configuration.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Maximum directory depth (default: 100).
    pub max_depth: Option<usize>,

    /// Whether to respect gitignore files.
    pub git_ignore: bool,

    /// Whether to include hidden files.
    pub hidden: bool,

    /// Files larger than this are skipped.
    pub max_file_size: u64,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            git_ignore: true,
            hidden: false,
            max_file_size: crate::reader::MAX_FILE_SIZE,
        }
    }
}

/// File discovered by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// Path to the file.
    pub path: PathBuf,

    /// File size in bytes.
    pub size: u64,
}

/// Statistics from a walk operation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WalkStats {
    /// Total files discovered.
    pub files_found: usize,

    /// Files skipped due to size limit.
    pub files_skipped_size: usize,

    /// Symlink loops detected.
    pub symlink_loops: usize,

    /// Errors encountered.
    pub errors: usize,
}

/// Gitignore-aware file walker.
pub struct FileWalker {
    config: WalkerConfig,
}

impl FileWalker {
    /// Create a new walker with the given configuration.
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Expand `roots` into the files to scan, sorted by path.
    pub fn walk(&self, roots: &[PathBuf]) -> (Vec<WalkedFile>, WalkStats) {
        let mut files = Vec::new();
        let mut stats = WalkStats::default();

        let Some((first, rest)) = roots.split_first() else {
            return (files, stats);
        };

        let mut builder = WalkBuilder::new(first);
        for root in rest {
            builder.add(root);
        }
        builder
            .hidden(!self.config.hidden)
            .git_ignore(self.config.git_ignore)
            .git_exclude(self.config.git_ignore)
            .git_global(self.config.git_ignore)
            .ignore(self.config.git_ignore)
            .parents(self.config.git_ignore)
            .require_git(false)
            .follow_links(true)
            .max_depth(self.config.max_depth)
            .filter_entry(|entry| {
                !entry.file_type().is_some_and(|t| t.is_dir())
                    || !entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| SKIP_DIRECTORIES.contains(&name))
            });

        for entry in builder.build() {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_some_and(|t| t.is_file()) {
                        continue;
                    }

                    let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
                    if entry.depth() > 0 && size > self.config.max_file_size {
                        tracing::warn!(
                            "skipping {} ({} bytes > {} byte limit)",
                            entry.path().display(),
                            size,
                            self.config.max_file_size
                        );
                        stats.files_skipped_size += 1;
                        continue;
                    }

                    stats.files_found += 1;
                    files.push(WalkedFile {
                        path: entry.into_path(),
                        size,
                    });
                }
                Err(err) => {
                    if is_loop_error(&err) {
                        tracing::warn!("Symlink loop detected: {}", err);
                        stats.symlink_loops += 1;
                    } else {
                        tracing::warn!("Walk error: {}", err);
                        stats.errors += 1;
                    }
                }
            }
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        files.dedup_by(|a, b| a.path == b.path);

        tracing::debug!(
            files = stats.files_found,
            skipped = stats.files_skipped_size,
            loops = stats.symlink_loops,
            errors = stats.errors,
            "walk complete"
        );

        (files, stats)
    }
}

/// Whether `path` should be treated as standard input.
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
