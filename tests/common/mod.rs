//! Shared testing utilities for ovidiu CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Directory CLI invocations run in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path the project under test is created at.
    pub fn project_path(&self) -> PathBuf {
        self.work_dir.join("proj")
    }

    /// Build a command for invoking the compiled `ovidiu` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("ovidiu").expect("Failed to locate ovidiu binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Assert that a scaffolded artifact exists relative to the project root.
    pub fn assert_artifact(&self, relative: &str) {
        assert!(self.project_path().join(relative).exists(), "{relative} should exist");
    }
}
