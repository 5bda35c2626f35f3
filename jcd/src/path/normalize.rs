//! Lexical path helpers for the resolution cursor.
//!
//! These functions never touch the filesystem. Ascending past the root is
//! clamped at the root, the way shells treat `cd ..` at `/`.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Returns the lexical parent of `path`, or `path` itself at the root.
///
/// # Examples
///
/// ```
/// use jcd::path::normalize::ascend;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(ascend(Path::new("/a/b")), PathBuf::from("/a"));
/// assert_eq!(ascend(Path::new("/")), PathBuf::from("/"));
/// ```
#[must_use]
pub fn ascend(path: &Path) -> PathBuf {
    path.parent().map_or_else(|| path.to_path_buf(), Path::to_path_buf)
}

/// Returns the root of an absolute path (`/` on Unix, `C:\` on Windows).
#[must_use]
pub fn root_of(path: &Path) -> PathBuf {
    path.components()
        .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect()
}

/// Resolve `.` and `..` components in an absolute path.
///
/// `..` at the root is dropped rather than rejected.
///
/// # Errors
///
/// Returns `InvalidPath` if `path` is not absolute.
///
/// # Examples
///
/// ```
/// use jcd::path::normalize::normalize_absolute;
/// use std::path::{Path, PathBuf};
///
/// let resolved = normalize_absolute(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/a/c"));
///
/// let clamped = normalize_absolute(Path::new("/a/../../..")).unwrap();
/// assert_eq!(clamped, PathBuf::from("/"));
///
/// assert!(normalize_absolute(Path::new("relative")).is_err());
/// ```
pub fn normalize_absolute(path: &Path) -> Result<PathBuf> {
    if !path.is_absolute() {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "starting directory must be absolute".to_string(),
        });
    }

    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => result.push(prefix.as_os_str()),
            Component::RootDir => result.push(component),
            Component::Normal(c) => result.push(c),
            Component::CurDir => {}
            Component::ParentDir => {
                // pop() refuses to remove the root, which is the clamp we want
                result.pop();
            }
        }
    }

    Ok(result)
}
