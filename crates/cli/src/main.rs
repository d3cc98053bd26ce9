// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Multimatch CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use multimatch::cli::{Cli, Command};
use multimatch::env::names;
use multimatch::error::ExitCode;

mod cmd_scan;
mod cmd_stats;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(names::MULTIMATCH_LOG).unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("multimatch: {}", e);
            match e.downcast_ref::<multimatch::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Scan(args)) => cmd_scan::run(&cli, args),
        Some(Command::Stats(args)) => {
            cmd_stats::run(&cli, args)?;
            Ok(ExitCode::Success)
        }
    }
}
