// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Find every occurrence of many literal patterns in one pass
#[derive(Parser)]
#[command(name = "multimatch")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "MULTIMATCH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search files, directories, or stdin for patterns
    Scan(ScanArgs),
    /// Show the shape of the automaton built from the patterns
    Stats(StatsArgs),
}

/// Pattern sources shared by every command.
#[derive(clap::Args, Default)]
pub struct PatternArgs {
    /// Pattern to search for (repeatable)
    #[arg(short = 'e', long = "pattern", value_name = "PATTERN")]
    pub inline: Vec<String>,

    /// Read patterns from a file, one per line (repeatable)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Files or directories to scan; `-` or nothing reads stdin
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub patterns: PatternArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Report each pattern at most once per input
    #[arg(long)]
    pub unique: bool,

    /// Print match counts per input instead of matches
    #[arg(long)]
    pub count: bool,

    /// Maximum matches to display (default: 15)
    #[arg(long, value_name = "N", conflicts_with = "no_limit")]
    pub limit: Option<usize>,

    /// Show all matches (no limit)
    #[arg(long)]
    pub no_limit: bool,

    /// Maximum directory depth to traverse
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Include hidden files and directories
    #[arg(long)]
    pub hidden: bool,

    /// Do not respect .gitignore and related files
    #[arg(long)]
    pub no_ignore: bool,

    /// Force color output
    #[arg(long, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

impl ScanArgs {
    /// Color override from the command line, if any.
    pub fn color_flag(&self) -> Option<bool> {
        match (self.color, self.no_color) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(clap::Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub patterns: PatternArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
