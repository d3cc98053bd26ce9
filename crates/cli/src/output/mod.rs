// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for scan results.

pub mod json;
pub mod text;

use crate::config::DEFAULT_LIMIT;

/// Output formatting options.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Maximum matches to show (None = unlimited).
    pub limit: Option<usize>,

    /// Print per-input match counts instead of matches.
    pub count: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            limit: Some(DEFAULT_LIMIT),
            count: false,
        }
    }
}

impl FormatOptions {
    /// Create options with no limit.
    pub fn no_limit() -> Self {
        Self {
            limit: None,
            ..Self::default()
        }
    }

    /// Create options with a specific limit.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }
}
