//! # Campus CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every test runs
//! the compiled `campus` binary inside a temporary home and working directory
//! so a developer's own `.campus.toml` or user config never leaks in.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// An isolated environment: the `TempDir` must outlive the command.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create sandbox dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.campus.toml` into the sandbox working directory.
    pub fn with_project_config(self, toml: &str) -> Self {
        std::fs::write(self.path().join(".campus.toml"), toml)
            .expect("Failed to write project config");
        self
    }

    /// Writes the user-level `config.toml` under the sandbox's `XDG_CONFIG_HOME`.
    pub fn with_user_config(self, toml: &str) -> Self {
        let dir = self.path().join(".config").join("campus");
        std::fs::create_dir_all(&dir).expect("Failed to create user config dir");
        std::fs::write(dir.join("config.toml"), toml).expect("Failed to write user config");
        self
    }

    /// A `campus` command whose home, config dir and cwd all point into the sandbox.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("campus").expect("Failed to find campus binary for testing");
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .env_remove("CAMPUS_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}
