// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles multimatch.toml parsing with version validation and unknown key
//! warnings. Unknown keys never fail a load; type errors in known keys do.

mod suggest;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::reader::MAX_FILE_SIZE;
use crate::walker::DEFAULT_MAX_DEPTH;
use suggest::warn_unknown_key;

/// Config file name looked up by discovery.
pub const CONFIG_FILE_NAME: &str = "multimatch.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "patterns", "scan"];

/// Known `[patterns]` keys.
const KNOWN_PATTERN_KEYS: &[&str] = &["list", "files"];

/// Known `[scan]` keys.
const KNOWN_SCAN_KEYS: &[&str] = &["hidden", "git_ignore", "max_depth", "max_file_size", "limit"];

/// Default number of matches shown in text output.
pub const DEFAULT_LIMIT: usize = 15;

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    #[serde(default)]
    patterns: Option<toml::Value>,

    #[serde(default)]
    scan: Option<toml::Value>,

    #[serde(flatten)]
    rest: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Pattern sources.
    pub patterns: PatternsConfig,

    /// Scan behavior.
    pub scan: ScanConfig,
}

/// `[patterns]` section.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PatternsConfig {
    /// Literal patterns.
    pub list: Vec<String>,

    /// Pattern files, one pattern per line. Relative paths are resolved
    /// against the directory holding the config file.
    pub files: Vec<PathBuf>,
}

/// `[scan]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Include hidden files and directories.
    pub hidden: bool,

    /// Respect .gitignore and related ignore files.
    pub git_ignore: bool,

    /// Maximum directory depth.
    pub max_depth: usize,

    /// Files larger than this are skipped.
    pub max_file_size: u64,

    /// Maximum matches shown in text output.
    pub limit: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            hidden: false,
            git_ignore: true,
            max_depth: DEFAULT_MAX_DEPTH,
            max_file_size: MAX_FILE_SIZE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})",
            version, SUPPORTED_VERSION
        )));
    }

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    for key in flexible.rest.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key, KNOWN_KEYS);
        }
    }

    let mut patterns: PatternsConfig = parse_section(
        flexible.patterns,
        "patterns",
        KNOWN_PATTERN_KEYS,
        path,
    )?;
    let scan: ScanConfig = parse_section(flexible.scan, "scan", KNOWN_SCAN_KEYS, path)?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    patterns.files = patterns
        .files
        .into_iter()
        .map(|file| if file.is_relative() { base.join(file) } else { file })
        .collect();

    Ok(Config {
        version,
        patterns,
        scan,
    })
}

/// Deserialize one section, warning about keys it does not know.
fn parse_section<T>(
    value: Option<toml::Value>,
    section: &str,
    known: &[&str],
    path: &Path,
) -> Result<T>
where
    T: Default + for<'de> Deserialize<'de>,
{
    let Some(value) = value else {
        return Ok(T::default());
    };

    let toml::Value::Table(table) = value else {
        return Err(Error::Config {
            message: format!("`{}` must be a table", section),
            path: Some(path.to_path_buf()),
        });
    };

    for key in table.keys() {
        if !known.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("{}.{}", section, key), known);
        }
    }

    toml::Value::Table(table)
        .try_into()
        .map_err(|e: toml::de::Error| Error::Config {
            message: format!("[{}] {}", section, e),
            path: Some(path.to_path_buf()),
        })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
