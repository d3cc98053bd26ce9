//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running multimatch against temp projects.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the multimatch binary
pub fn multimatch_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("multimatch"));
    cmd.env_remove("COLOR")
        .env_remove("NO_COLOR")
        .env_remove("MULTIMATCH_CONFIG");
    cmd
}

/// Create a scan builder
pub fn scan() -> CommandBuilder<Text> {
    CommandBuilder::new("scan")
}

/// Create a stats builder
pub fn stats() -> CommandBuilder<Text> {
    CommandBuilder::new("stats")
}

/// Typestate markers for output mode
pub struct Text;
pub struct Json;

/// Extra arguments an output mode adds to the command line
pub trait OutputMode {
    const ARGS: &'static [&'static str];
}

impl OutputMode for Text {
    const ARGS: &'static [&'static str] = &[];
}

impl OutputMode for Json {
    const ARGS: &'static [&'static str] = &["-o", "json"];
}

/// High-level command builder for fluent test assertions
pub struct CommandBuilder<Mode = Text> {
    command: &'static str,
    dir: Option<PathBuf>,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Option<Vec<u8>>,
    _mode: PhantomData<Mode>,
}

#[allow(dead_code)]
impl CommandBuilder<Text> {
    fn new(command: &'static str) -> Self {
        Self {
            command,
            dir: None,
            args: Vec::new(),
            envs: Vec::new(),
            stdin: None,
            _mode: PhantomData,
        }
    }

    /// Switch to JSON output
    pub fn json(self) -> CommandBuilder<Json> {
        CommandBuilder {
            command: self.command,
            dir: self.dir,
            args: self.args,
            envs: self.envs,
            stdin: self.stdin,
            _mode: PhantomData,
        }
    }

    /// Expect at least one match (exit 0)
    pub fn matches(self) -> RunAssert {
        run_exits(self.build(), 0)
    }

    /// Expect no matches (exit 1)
    pub fn no_match(self) -> RunAssert {
        run_exits(self.build(), 1)
    }

    /// Expect a specific exit code
    pub fn exits(self, code: i32) -> RunAssert {
        run_exits(self.build(), code)
    }
}

#[allow(dead_code)]
impl CommandBuilder<Json> {
    /// Expect exit 0 and parse stdout
    pub fn matches(self) -> serde_json::Value {
        parse_json(run_exits(self.build(), 0))
    }

    /// Expect exit 1 and parse stdout
    pub fn no_match(self) -> serde_json::Value {
        parse_json(run_exits(self.build(), 1))
    }
}

#[allow(dead_code)]
impl<Mode: OutputMode> CommandBuilder<Mode> {
    /// Set the working directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Add arguments after the subcommand
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set an environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Feed bytes to stdin
    pub fn stdin(mut self, input: impl Into<Vec<u8>>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    fn build(self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::from_std(multimatch_cmd());
        cmd.arg(self.command);
        cmd.args(Mode::ARGS);
        cmd.args(&self.args);
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }
        // Never inherit the test runner's stdin.
        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd
    }
}

fn run_exits(mut cmd: assert_cmd::Command, code: i32) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
        code,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

fn parse_json(run: RunAssert) -> serde_json::Value {
    serde_json::from_slice(&run.output.stdout).expect("stdout should be valid JSON")
}

pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout matches predicate.
    /// Prefer `stdout_eq` for strict matching.
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }
}

// =============================================================================
// Project
// =============================================================================

/// Temporary project directory with helper methods.
///
/// The directory carries an empty `.git` so config discovery never escapes
/// into the enclosing filesystem.
///
/// ```ignore
/// let temp = Project::empty();
/// temp.file("notes.txt", "TODO: ship it");
/// scan().pwd(temp.path()).args(&["notes.txt", "-e", "TODO"]).matches();
/// ```
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Create an empty project
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write multimatch.toml (auto-prefixes with `version = 1` if not present)
    pub fn config(&self, content: &str) {
        let content = if content.contains("version") {
            content.to_string()
        } else {
            format!("version = 1\n{}", content)
        };
        std::fs::write(self.dir.path().join("multimatch.toml"), content).unwrap();
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }
}
