// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Multi-pattern byte matching with an Aho-Corasick automaton.
//!
//! The [`automaton`] module holds the matcher itself. [`registry`] keeps
//! built automata behind opaque handles. The remaining modules make up the
//! `multimatch` command-line tool.

pub mod automaton;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod env;
pub mod error;
pub mod output;
pub mod patterns;
pub mod reader;
pub mod registry;
pub mod scan;
pub mod walker;

pub use automaton::{Automaton, Builder, Match, PatternId};
pub use cli::{Cli, Command, OutputFormat, ScanArgs, StatsArgs};
pub use error::{Error, ExitCode, Result};
pub use patterns::PatternSet;
pub use reader::{FileContent, FileReader};
pub use registry::{Handle, Registry};
pub use scan::{ScanReport, Scanner};
pub use walker::{FileWalker, WalkStats, WalkedFile, WalkerConfig};
