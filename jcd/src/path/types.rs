//! Shared types for candidate listing and resolution.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Whether pattern matching respects letter case.
///
/// Literal `.`/`..` tokens are never affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    /// Pattern must occur exactly as typed.
    #[default]
    Sensitive,
    /// Pattern and name are both lowercased before comparing.
    Insensitive,
}

impl CaseSensitivity {
    /// Maps an "ignore case" flag to a policy.
    #[must_use]
    pub const fn from_ignore_case(ignore_case: bool) -> Self {
        if ignore_case {
            Self::Insensitive
        } else {
            Self::Sensitive
        }
    }

    /// Applies the case-folding transform for this policy.
    #[must_use]
    pub fn fold(self, text: &str) -> String {
        match self {
            Self::Sensitive => text.to_string(),
            Self::Insensitive => text.to_lowercase(),
        }
    }
}

/// How candidates are ordered before the match index is applied.
///
/// The default keeps whatever order the OS directory iterator yields. That
/// order is platform-defined and not lexical, so callers who need stable
/// indices should ask for [`ListingOrder::Lexical`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ListingOrder {
    /// Directory iteration order, unsorted.
    #[default]
    Filesystem,
    /// Sorted by file name.
    Lexical,
    /// Exact names first, then prefix matches, then substring matches;
    /// filesystem order within each group.
    Quality,
}

impl ListingOrder {
    /// Parses an order name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error naming `field` for unknown values.
    ///
    /// # Examples
    ///
    /// ```
    /// use jcd::ListingOrder;
    ///
    /// assert_eq!(ListingOrder::parse("LEXICAL", "order").unwrap(), ListingOrder::Lexical);
    /// assert!(ListingOrder::parse("random", "order").is_err());
    /// ```
    pub fn parse(s: &str, field: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "filesystem" => Ok(Self::Filesystem),
            "lexical" => Ok(Self::Lexical),
            "quality" => Ok(Self::Quality),
            other => Err(Error::Validation {
                field: field.to_string(),
                message: format!(
                    "unknown listing order '{other}' (expected filesystem, lexical or quality)"
                ),
            }),
        }
    }
}

impl fmt::Display for ListingOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filesystem => write!(f, "filesystem"),
            Self::Lexical => write!(f, "lexical"),
            Self::Quality => write!(f, "quality"),
        }
    }
}

/// How well a directory name matched a pattern.
///
/// Ordered best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchQuality {
    /// The whole name equals the pattern.
    Exact,
    /// The name starts with the pattern.
    Prefix,
    /// The pattern occurs somewhere inside the name.
    Partial,
}

impl MatchQuality {
    /// Grades `name` against `pattern`, both already case-folded.
    ///
    /// Returns `None` when the pattern does not occur in the name.
    #[must_use]
    pub fn grade(name: &str, pattern: &str) -> Option<Self> {
        if name == pattern {
            Some(Self::Exact)
        } else if name.starts_with(pattern) {
            Some(Self::Prefix)
        } else if name.contains(pattern) {
            Some(Self::Partial)
        } else {
            None
        }
    }
}

/// A child directory that matched a pattern segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    name: String,
    path: PathBuf,
    quality: MatchQuality,
}

impl Candidate {
    pub(crate) fn new(name: String, path: PathBuf, quality: MatchQuality) -> Self {
        Self {
            name,
            path,
            quality,
        }
    }

    /// The directory name (lossy UTF-8 for non-UTF-8 names).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The absolute path of the directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// How well the name matched.
    #[must_use]
    pub fn quality(&self) -> MatchQuality {
        self.quality
    }

    /// Consumes the candidate and returns its path.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}
