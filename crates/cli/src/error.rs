// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::registry::Handle;

/// Multimatch error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No automaton is registered under the handle
    #[error("no automaton registered for handle {handle}")]
    NotFound { handle: Handle },

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds maximum size limit.
    #[error("file too large: {} ({} bytes, max: {} bytes)", .path.display(), .size, .max_size)]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Walker error.
    #[error("walk error: {message}")]
    Walk { message: String },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using multimatch Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// At least one match was found
    Success = 0,
    /// Scan completed without matches
    NoMatch = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Internal or I/O error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::NotFound { .. } => ExitCode::InternalError,
            Error::Io { .. } => ExitCode::InternalError,
            Error::FileTooLarge { .. } => ExitCode::InternalError,
            Error::Walk { .. } => ExitCode::InternalError,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
