//! Common test utilities for workscan integration tests.
//!
//! Provides `TestEnv` for building synthetic workspaces in temporary
//! directories and invoking the `wscan` binary against them.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
pub use tempfile::TempDir;

/// A test environment with an isolated synthetic workspace.
///
/// The workspace root, output path, and skills directory all live inside
/// temporary directories, so tests are parallel-safe and never touch the
/// user's real workspace.
pub struct TestEnv {
    pub workspace: TempDir,
    pub out: TempDir,
}

impl TestEnv {
    /// Create a new empty workspace.
    pub fn new() -> Self {
        Self {
            workspace: TempDir::new().unwrap(),
            out: TempDir::new().unwrap(),
        }
    }

    /// Get a Command for the wscan binary pointed at this workspace,
    /// writing output inside the isolated output directory.
    pub fn wscan(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_wscan"));
        cmd.args(["--root"]).arg(self.root());
        cmd.args(["--output"]).arg(self.output_path());
        cmd.args(["--overrides"]).arg(self.root().join("overrides.json"));
        cmd.args(["--skills-dir"]).arg(self.root().join("skills"));
        cmd
    }

    /// Path to the workspace root.
    pub fn root(&self) -> &Path {
        self.workspace.path()
    }

    /// Path the aggregated document is written to.
    pub fn output_path(&self) -> PathBuf {
        self.out.path().join("workspace-data.json")
    }

    /// Write a file under the workspace root, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Create a directory under the workspace root.
    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Run the binary and parse the written document.
    pub fn scan(&self) -> serde_json::Value {
        self.wscan().assert().success();
        let raw = fs::read_to_string(self.output_path()).unwrap();
        serde_json::from_str(&raw).unwrap()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
