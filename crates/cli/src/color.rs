// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. `--color` / `--no-color` on the command line
//! 2. `NO_COLOR` env var → no color
//! 3. `COLOR` env var → color
//! 4. default: color only when stdout is a TTY outside CI

use std::io::IsTerminal;

use termcolor::ColorChoice;

use crate::env::{self, names};

/// Resolve the color choice, with an optional command-line override.
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` set to any value
/// (including empty) disables color.
pub fn resolve_color(flag: Option<bool>) -> ColorChoice {
    match flag {
        Some(true) => return ColorChoice::Always,
        Some(false) => return ColorChoice::Never,
        None => {}
    }
    if env::is_set(names::NO_COLOR) {
        return ColorChoice::Never;
    }
    if env::is_set(names::COLOR) {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() || env::is_set(names::CI) {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Color scheme for scan output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Cyan input path.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Yellow line number.
    pub fn line_number() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Bold red pattern text.
    pub fn pattern() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Bold label in `stats` output.
    pub fn label() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
