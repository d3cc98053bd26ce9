// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stats command implementation.

use std::io::Write;

use termcolor::{StandardStream, WriteColor};

use multimatch::cli::{Cli, OutputFormat, StatsArgs};
use multimatch::color::{resolve_color, scheme};
use multimatch::discovery;
use multimatch::output::json::JsonFormatter;
use multimatch::patterns::PatternSet;

/// Run the stats command.
pub fn run(cli: &Cli, args: &StatsArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = discovery::load_config(cli.config.as_deref(), &cwd)?;

    let patterns =
        PatternSet::from_sources(&config.patterns, &args.patterns.files, &args.patterns.inline)?;
    let stats = patterns.build().stats();

    match args.output {
        OutputFormat::Text => {
            let mut out = StandardStream::stdout(resolve_color(None));
            let rows = [
                ("patterns", stats.patterns),
                ("nodes", stats.nodes),
                ("max depth", stats.max_depth),
                ("empty patterns", stats.empty_patterns),
            ];
            for (label, value) in rows {
                out.set_color(&scheme::label())?;
                write!(out, "{}:", label)?;
                out.reset()?;
                writeln!(out, " {}", value)?;
            }
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock()).write_value(&stats)?;
        }
    }

    Ok(())
}
