//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - An isolated environment with its own `HOME` and config directory
//! - A directory tree builder
//! - Output helpers for comparing printed paths

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated home and config directory.
///
/// Every command runs with `HOME` and `XDG_CONFIG_HOME` pointing inside the
/// temporary directory and all `JCD_*` variables cleared, so the user's own
/// ignore files and configuration never leak into a test.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path to the temporary directory
    pub temp_path: PathBuf,
    /// Fake home directory
    pub home: PathBuf,
    /// Fake `XDG_CONFIG_HOME`
    pub config_home: PathBuf,
    /// Root of the directory tree under test
    pub tree: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The path is canonicalized because the child's working directory is
    /// reported in canonical form.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        let home = temp_path.join("home");
        let config_home = temp_path.join("config");
        let tree = temp_path.join("tree");
        for dir in [&home, &config_home, &tree] {
            std::fs::create_dir_all(dir).expect("Failed to create test directory");
        }

        Self {
            temp_dir,
            temp_path,
            home,
            config_home,
            tree,
        }
    }

    /// The standard navigation fixture under `tree`.
    pub fn with_navigation_tree() -> Self {
        let env = Self::new();
        for dir in [
            "parent/child1",
            "parent/child2",
            "parent/subdir/deep1",
            "parent/subdir/deep2",
            "sibling/sub1",
            "foo/bar",
        ] {
            env.create_dir(dir);
        }
        env
    }

    /// Get a command builder running in `cwd` with an isolated environment.
    pub fn command_in(&self, cwd: &Path) -> Command {
        let mut cmd = Command::cargo_bin("jcd").expect("Failed to find jcd binary");
        cmd.current_dir(cwd)
            .env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", &self.config_home)
            .env_remove("JCD_CONFIG")
            .env_remove("JCD_LISTING_ORDER")
            .env_remove("JCD_NO_IGNORE")
            .env_remove("JCD_LOG_MODE")
            .env_remove("JCD_DEBUG");
        cmd
    }

    /// Get a command builder running in a directory of the tree.
    pub fn command(&self, cwd: &str) -> Command {
        self.command_in(&self.path(cwd))
    }

    /// Absolute path of a directory in the tree.
    pub fn path(&self, relative: &str) -> PathBuf {
        if relative.is_empty() {
            self.tree.clone()
        } else {
            self.tree.join(relative)
        }
    }

    /// Create a directory in the tree.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file at an absolute path.
    pub fn write_file(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(path, content).expect("Failed to write test file");
    }

    /// Write the user config file.
    pub fn write_config(&self, content: &str) {
        self.write_file(&self.config_home.join("jcd").join("config.yaml"), content);
    }
}

/// The path printed to stdout, with the trailing newline removed.
#[allow(dead_code)]
pub fn stdout_path(output: &std::process::Output) -> PathBuf {
    let stdout = String::from_utf8(output.stdout.clone()).expect("Invalid UTF-8 in output");
    PathBuf::from(stdout.trim_end_matches('\n'))
}

/// The expected stdout for a resolved directory.
#[allow(dead_code)]
pub fn line(path: &Path) -> String {
    format!("{}\n", path.display())
}
