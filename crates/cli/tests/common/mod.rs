// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scenario file in its own temp directory
pub struct Scenario {
    _dir: TempDir,
    pub path: PathBuf,
}

/// Write scenario lines to a fresh temp file.
pub fn scenario(lines: &[&str]) -> Scenario {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("scenario.jsonl");
    fs::write(&path, lines.join("\n")).expect("Failed to write scenario");
    Scenario { _dir: dir, path }
}

/// `pxb replay` with short windows: 300ms expiry, 100ms grace, 100ms settle
pub fn replay(scenario: &Scenario) -> Command {
    let mut cmd = Command::cargo_bin("pxb").expect("pxb binary");
    cmd.arg("replay")
        .arg(&scenario.path)
        .args(["--expiry-window-ms", "300", "--grace-ms", "100", "--settle-ms", "100"])
        .env("RUST_LOG", "warn");
    cmd
}

/// Stdout of a successful run, split into lines
pub fn stdout_lines(cmd: &mut Command) -> Vec<String> {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output)
        .expect("stdout is utf-8")
        .lines()
        .map(str::to_string)
        .collect()
}
