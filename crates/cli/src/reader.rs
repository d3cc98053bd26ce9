// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Size-gated input reading.
//!
//! Search needs each input as one complete buffer, so files are read whole.
//! Files above the size limit are rejected before any bytes are read; stdin
//! is read to the end with the same limit enforced on the bytes received.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Size at which reading a file is logged (1MB).
pub const LARGE_FILE_WARN: u64 = 1024 * 1024;

/// Default maximum file size to read (10MB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Display name used for standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Input content with metadata.
#[derive(Debug)]
pub struct FileContent {
    /// The content as bytes.
    pub bytes: Vec<u8>,

    /// Size in bytes.
    pub size: u64,
}

/// Size-gated reader for files and stdin.
#[derive(Debug, Clone, Copy)]
pub struct FileReader {
    max_size: u64,
}

impl Default for FileReader {
    fn default() -> Self {
        Self {
            max_size: MAX_FILE_SIZE,
        }
    }
}

impl FileReader {
    /// Create a new reader with the default limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with custom max size.
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Read a file, checking size limits.
    ///
    /// Returns `Err(FileTooLarge)` for files exceeding max_size.
    pub fn read(&self, path: &Path) -> Result<FileContent> {
        let io_error = |e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        };

        let size = std::fs::metadata(path).map_err(io_error)?.len();
        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max_size: self.max_size,
            });
        }

        if size > LARGE_FILE_WARN {
            tracing::info!(
                path = %path.display(),
                size_mb = size as f64 / 1_000_000.0,
                "Reading large file"
            );
        }

        let mut file = File::open(path).map_err(io_error)?;
        let mut bytes = Vec::with_capacity(size as usize);
        file.read_to_end(&mut bytes).map_err(io_error)?;

        Ok(FileContent {
            size: bytes.len() as u64,
            bytes,
        })
    }

    /// Read all of `input` (normally stdin), enforcing the size limit.
    pub fn read_stream(&self, input: impl Read) -> Result<FileContent> {
        let stdin_path = || PathBuf::from(STDIN_NAME);

        let mut bytes = Vec::new();
        // Read one byte past the limit to detect oversized input.
        input
            .take(self.max_size.saturating_add(1))
            .read_to_end(&mut bytes)
            .map_err(|e| Error::Io {
                path: stdin_path(),
                source: e,
            })?;

        let size = bytes.len() as u64;
        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: stdin_path(),
                size,
                max_size: self.max_size,
            });
        }

        Ok(FileContent { bytes, size })
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
