//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing routeset CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the routeset binary
pub fn routeset_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("routeset"));
    cmd.env_remove("ROUTESET_CONFIG");
    cmd.env_remove("ROUTESET_LOG");
    cmd
}

/// Creates a temp project with a git root marker and the given routeset.toml.
pub fn temp_project(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    std::fs::write(dir.path().join("routeset.toml"), config).unwrap();
    dir
}

/// Creates a temp project with a git root marker and no config.
pub fn temp_empty_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}

/// Runs `routeset compile` with the given args and returns stdout.
pub fn compile_stdout(args: &[&str]) -> String {
    let output = routeset_cmd().arg("compile").args(args).output().unwrap();
    assert!(
        output.status.success(),
        "compile failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

/// Runs `routeset build` in `dir` and returns stdout.
pub fn build_stdout(dir: &Path, args: &[&str]) -> String {
    let output = routeset_cmd()
        .arg("build")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "build failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}
