//! Behavioral specs for multimatch.toml handling.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn config_patterns_are_used() {
    let temp = Project::empty();
    temp.config("[patterns]\nlist = [\"TODO\", \"FIXME\"]\n");
    temp.file("a.txt", "FIXME later");

    scan()
        .pwd(temp.path())
        .args(&["a.txt"])
        .matches()
        .stdout_eq("a.txt:1:0-5: FIXME\n");
}

#[test]
fn config_patterns_come_first() {
    let temp = Project::empty();
    temp.config("[patterns]\nlist = [\"one\"]\n");

    let json = scan()
        .pwd(temp.path())
        .json()
        .args(&["-e", "two"])
        .stdin("two one")
        .matches();
    let ids: Vec<u64> = json["files"][0]["matches"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["pattern"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, [1, 0]);
}

#[test]
fn config_pattern_files_resolve_against_config_dir() {
    let temp = Project::empty();
    temp.config("[patterns]\nfiles = [\"lists/words.txt\"]\n");
    temp.file("lists/words.txt", "needle\n");
    temp.file("sub/a.txt", "haystack needle");

    scan()
        .pwd(temp.path().join("sub"))
        .args(&["a.txt"])
        .matches()
        .stdout_eq("a.txt:1:9-15: needle\n");
}

#[test]
fn config_limit_applies() {
    let temp = Project::empty();
    temp.config("[scan]\nlimit = 1\n");

    scan()
        .pwd(temp.path())
        .args(&["-e", "a"])
        .stdin("aaa")
        .matches()
        .stdout_has("Stopped after 1 of 3 matches.");
}

#[test]
fn explicit_config_flag() {
    let temp = Project::empty();
    temp.file("custom.toml", "version = 1\n[patterns]\nlist = [\"xyz\"]\n");

    scan()
        .pwd(temp.path())
        .args(&["-C", "custom.toml"])
        .stdin("xyz")
        .matches();
}

#[test]
fn config_env_var() {
    let temp = Project::empty();
    temp.file("custom.toml", "version = 1\n[patterns]\nlist = [\"xyz\"]\n");

    scan()
        .pwd(temp.path())
        .env("MULTIMATCH_CONFIG", "custom.toml")
        .stdin("xyz")
        .matches();
}

#[test]
fn missing_explicit_config_exits_two() {
    let temp = Project::empty();

    scan()
        .pwd(temp.path())
        .args(&["-C", "nope.toml", "-e", "a"])
        .stdin("a")
        .exits(2)
        .stderr_has("config file not found");
}

#[test]
fn unsupported_version_exits_two() {
    let temp = Project::empty();
    temp.config("version = 2\n");

    scan()
        .pwd(temp.path())
        .args(&["-e", "a"])
        .stdin("a")
        .exits(2)
        .stderr_has("unsupported config version 2");
}

#[test]
fn invalid_toml_exits_two() {
    let temp = Project::empty();
    temp.config("version = 1\n[patterns\n");

    scan()
        .pwd(temp.path())
        .args(&["-e", "a"])
        .stdin("a")
        .exits(2);
}

#[test]
fn unknown_key_warns_with_suggestion() {
    let temp = Project::empty();
    temp.config("[scan]\nhiden = true\n");

    scan()
        .pwd(temp.path())
        .args(&["-e", "a"])
        .stdin("a")
        .matches()
        .stderr_has("unrecognized field `scan.hiden`. Did you mean `hidden`?");
}
