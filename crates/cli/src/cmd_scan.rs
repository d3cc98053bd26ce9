// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan command implementation.

use std::path::PathBuf;

use termcolor::StandardStream;

use multimatch::cli::{Cli, OutputFormat, ScanArgs};
use multimatch::color::resolve_color;
use multimatch::discovery;
use multimatch::error::{Error, ExitCode};
use multimatch::output::FormatOptions;
use multimatch::output::json::JsonFormatter;
use multimatch::output::text::TextFormatter;
use multimatch::patterns::PatternSet;
use multimatch::reader::FileReader;
use multimatch::scan::{ScanOptions, ScanReport, Scanner};
use multimatch::walker::{FileWalker, WalkStats, WalkerConfig, is_stdin};

/// Run the scan command.
pub fn run(cli: &Cli, args: &ScanArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = discovery::load_config(cli.config.as_deref(), &cwd)?;

    let patterns =
        PatternSet::from_sources(&config.patterns, &args.patterns.files, &args.patterns.inline)?;
    if patterns.is_empty() {
        return Err(Error::Argument(
            "no patterns given (use -e, -f, or [patterns] in multimatch.toml)".to_string(),
        )
        .into());
    }

    let automaton = patterns.build();
    let reader = FileReader::with_max_size(config.scan.max_file_size);
    let scanner = Scanner::new(&automaton, reader, ScanOptions {
        unique: args.unique,
        keep_empty: args.count,
    });

    let read_stdin = args.paths.is_empty() || args.paths.iter().any(|p| is_stdin(p));
    let roots: Vec<PathBuf> = args
        .paths
        .iter()
        .filter(|p| !is_stdin(p))
        .cloned()
        .collect();

    let mut report = ScanReport::default();

    if !roots.is_empty() {
        let walker = FileWalker::new(WalkerConfig {
            max_depth: Some(args.max_depth.unwrap_or(config.scan.max_depth)),
            git_ignore: config.scan.git_ignore && !args.no_ignore,
            hidden: config.scan.hidden || args.hidden,
            max_file_size: config.scan.max_file_size,
        });
        let (files, walk_stats) = walker.walk(&roots);
        warn_walk_stats(&walk_stats, config.scan.max_file_size);
        report.merge(scanner.scan_files(&files));
    }

    if read_stdin {
        report.merge(scanner.scan_stream(std::io::stdin().lock()));
    }

    let options = FormatOptions {
        limit: if args.no_limit {
            None
        } else {
            Some(args.limit.unwrap_or(config.scan.limit))
        },
        count: args.count,
    };

    match args.output {
        OutputFormat::Text => {
            let stdout = StandardStream::stdout(resolve_color(args.color_flag()));
            let mut formatter = TextFormatter::new(stdout, options);
            formatter.write_report(&report, &patterns)?;
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(std::io::stdout().lock());
            formatter.write(&report, &patterns, &options)?;
        }
    }

    Ok(if report.has_matches() {
        ExitCode::Success
    } else {
        ExitCode::NoMatch
    })
}

fn warn_walk_stats(stats: &WalkStats, max_file_size: u64) {
    if stats.files_skipped_size > 0 {
        eprintln!(
            "multimatch: warning: skipped {} file(s) larger than {} bytes",
            stats.files_skipped_size, max_file_size
        );
    }
    if stats.symlink_loops > 0 {
        eprintln!(
            "multimatch: warning: {} symlink loop(s) detected",
            stats.symlink_loops
        );
    }
    if stats.errors > 0 {
        eprintln!(
            "multimatch: warning: {} path(s) could not be walked",
            stats.errors
        );
    }
}
