//! Common test utilities for integration tests.
//!
//! This module provides fixture trees for exercising the resolver against
//! a real filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory tree that is removed when dropped.
pub struct Tree {
    root: TempDir,
}

impl Tree {
    /// Creates the given directories (and their parents) under a fresh root.
    pub fn new(dirs: &[&str]) -> Self {
        let root = tempfile::tempdir().unwrap();
        for dir in dirs {
            fs::create_dir_all(root.path().join(dir)).unwrap();
        }
        Self { root }
    }

    /// The standard navigation fixture:
    ///
    /// ```text
    /// parent/child1
    /// parent/child2
    /// parent/subdir/nested
    /// sibling/inner
    /// foo/bar
    /// ```
    pub fn navigation() -> Self {
        Self::new(&[
            "parent/child1",
            "parent/child2",
            "parent/subdir/nested",
            "sibling/inner",
            "foo/bar",
        ])
    }

    /// Absolute path to the tree root.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Absolute path to a directory inside the tree.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Writes a regular file inside the tree.
    #[allow(dead_code)]
    pub fn file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        fs::write(&path, content).unwrap();
        path
    }
}
