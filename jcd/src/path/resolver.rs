//! Path expression resolution.
//!
//! This module provides the `Resolver` type, which walks a
//! [`PathExpression`] from a starting directory one segment at a time and
//! returns the directory it lands on.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{IgnoreSet, Settings};
use crate::error::{Error, Result};
use crate::path::candidates::CandidateLister;
use crate::path::normalize;
use crate::path::segment::{PathExpression, Segment};
use crate::path::types::{CaseSensitivity, Candidate, ListingOrder, MatchQuality};

/// Resolves path expressions against the filesystem.
///
/// Segments are applied left to right with no backtracking:
/// - `..` moves the cursor to its parent (staying put at the root)
/// - `.` leaves it unchanged
/// - a pattern moves it into a matching child directory
///
/// The match index only addresses the final segment; earlier pattern
/// segments always take their first candidate. Any failure aborts the whole
/// resolution.
///
/// # Examples
///
/// ```no_run
/// use jcd::path::Resolver;
/// use jcd::CaseSensitivity;
/// use std::env;
///
/// let resolver = Resolver::new().with_case_sensitivity(CaseSensitivity::Insensitive);
/// let cwd = env::current_dir().unwrap();
///
/// let parent = resolver.resolve_str("..", &cwd, 0).unwrap();
/// assert_eq!(Some(parent.as_path()), cwd.parent());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    lister: CandidateLister,
}

impl Resolver {
    /// Create a resolver with default settings: case-sensitive, filesystem
    /// order, no ignore patterns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver from loaded configuration.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new()
            .with_listing_order(settings.listing_order)
            .with_ignore_set(settings.ignore.clone())
    }

    /// Configure pattern case sensitivity.
    #[must_use]
    pub fn with_case_sensitivity(mut self, case: CaseSensitivity) -> Self {
        self.lister = self.lister.with_case_sensitivity(case);
        self
    }

    /// Configure candidate ordering.
    #[must_use]
    pub fn with_listing_order(mut self, order: ListingOrder) -> Self {
        self.lister = self.lister.with_listing_order(order);
        self
    }

    /// Configure ignore patterns.
    #[must_use]
    pub fn with_ignore_set(mut self, ignore: IgnoreSet) -> Self {
        self.lister = self.lister.with_ignore_set(ignore);
        self
    }

    /// The candidate lister used for pattern segments.
    #[must_use]
    pub fn lister(&self) -> &CandidateLister {
        &self.lister
    }

    /// Parse `raw` and resolve it.
    ///
    /// # Errors
    ///
    /// See [`PathExpression::parse`] and [`Resolver::resolve`].
    pub fn resolve_str(&self, raw: &str, start_dir: &Path, index: usize) -> Result<PathBuf> {
        let expression = PathExpression::parse(raw)?;
        self.resolve(&expression, start_dir, index)
    }

    /// Resolve an expression to an absolute directory.
    ///
    /// `start_dir` must be absolute; it is normalized lexically and must
    /// exist. When the final segment is `.` or `..` (or the expression is the
    /// bare root `/`) there is exactly one result, so any index other than 0
    /// is out of range.
    ///
    /// An anchored expression made only of patterns that spells out an
    /// existing directory resolves to that directory at index 0; higher
    /// indexes walk the remaining pattern matches (see
    /// [`Resolver::candidates`]).
    ///
    /// # Errors
    ///
    /// - `InvalidPath` if `start_dir` is relative
    /// - `NotADirectory`/`Unreadable` if a cursor cannot be listed
    /// - `NoMatch` if a pattern segment has no candidates
    /// - `IndexOutOfRange` if `index` is not below the final candidate count
    pub fn resolve(
        &self,
        expression: &PathExpression,
        start_dir: &Path,
        index: usize,
    ) -> Result<PathBuf> {
        if self.existing_anchored_path(expression, start_dir)?.is_some() {
            let mut candidates = self.candidates(expression, start_dir)?;
            let count = candidates.len();
            if index >= count {
                return Err(Error::IndexOutOfRange { index, count });
            }
            let resolved = candidates.swap_remove(index).into_path_buf();
            log::debug!("resolved '{expression}' to {}", resolved.display());
            return Ok(resolved);
        }

        let cursor = self.cursor_before_final(expression, start_dir)?;

        let resolved = match expression.final_segment() {
            Some(Segment::Pattern(text)) => {
                let mut candidates = self.matching(&cursor, text)?;
                let count = candidates.len();
                if index >= count {
                    return Err(Error::IndexOutOfRange { index, count });
                }
                candidates.swap_remove(index).into_path_buf()
            }
            final_segment => {
                if index != 0 {
                    return Err(Error::IndexOutOfRange { index, count: 1 });
                }
                match final_segment {
                    Some(segment) => step_literal(&cursor, segment),
                    None => cursor,
                }
            }
        };

        log::debug!("resolved '{expression}' to {}", resolved.display());
        Ok(resolved)
    }

    /// All candidates the match index can select for `expression`.
    ///
    /// Every segment but the last is resolved as in [`Resolver::resolve`];
    /// the final pattern segment's candidates are returned in listing order.
    /// A literal final segment yields exactly one entry.
    ///
    /// An anchored, pattern-only expression that spells out an existing
    /// directory lists that directory first, followed by the pattern matches
    /// that differ from it.
    ///
    /// # Errors
    ///
    /// Same as [`Resolver::resolve`], minus `IndexOutOfRange`.
    pub fn candidates(
        &self,
        expression: &PathExpression,
        start_dir: &Path,
    ) -> Result<Vec<Candidate>> {
        let Some(exact) = self.existing_anchored_path(expression, start_dir)? else {
            return self.segment_candidates(expression, start_dir);
        };

        log::debug!("'{expression}' names an existing directory");
        let mut candidates = vec![literal_candidate(exact.clone())];
        match self.segment_candidates(expression, start_dir) {
            Ok(matches) => candidates.extend(matches.into_iter().filter(|c| c.path() != exact)),
            Err(e) => log::debug!("no further matches for '{expression}': {e}"),
        }
        Ok(candidates)
    }

    /// The directory an anchored expression names verbatim, if it exists.
    ///
    /// Only expressions made entirely of pattern segments qualify, so
    /// `/usr/lib` is taken as written while `/usr/../lib` is not.
    fn existing_anchored_path(
        &self,
        expression: &PathExpression,
        start_dir: &Path,
    ) -> Result<Option<PathBuf>> {
        if !expression.is_anchored()
            || expression.is_empty()
            || expression.segments().iter().any(Segment::is_literal)
        {
            return Ok(None);
        }

        let start = normalize::normalize_absolute(start_dir)?;
        verify_directory(&start)?;

        let mut path = normalize::root_of(&start);
        path.extend(expression.segments().iter().filter_map(Segment::pattern));
        Ok(fs::metadata(&path).is_ok_and(|m| m.is_dir()).then_some(path))
    }

    /// Candidates produced by applying the segment rules alone.
    fn segment_candidates(
        &self,
        expression: &PathExpression,
        start_dir: &Path,
    ) -> Result<Vec<Candidate>> {
        let cursor = self.cursor_before_final(expression, start_dir)?;

        match expression.final_segment() {
            Some(Segment::Pattern(text)) => self.matching(&cursor, text),
            final_segment => {
                let path = match final_segment {
                    Some(segment) => step_literal(&cursor, segment),
                    None => cursor,
                };
                Ok(vec![literal_candidate(path)])
            }
        }
    }

    /// Applies every segment except the last, taking the first candidate
    /// for each pattern.
    fn cursor_before_final(
        &self,
        expression: &PathExpression,
        start_dir: &Path,
    ) -> Result<PathBuf> {
        let start = normalize::normalize_absolute(start_dir)?;
        verify_directory(&start)?;

        let mut cursor = if expression.is_anchored() {
            normalize::root_of(&start)
        } else {
            start
        };
        log::debug!("resolving '{expression}' from {}", cursor.display());

        let leading = expression.len().saturating_sub(1);
        for segment in &expression.segments()[..leading] {
            cursor = match segment {
                Segment::Pattern(text) => {
                    let first = self.matching(&cursor, text)?.swap_remove(0);
                    log::debug!("'{text}' -> {}", first.path().display());
                    first.into_path_buf()
                }
                literal => step_literal(&cursor, literal),
            };
        }

        Ok(cursor)
    }

    /// Lists candidates, failing with `NoMatch` when there are none.
    fn matching(&self, cursor: &Path, pattern: &str) -> Result<Vec<Candidate>> {
        let candidates = self.lister.list(cursor, pattern)?;
        if candidates.is_empty() {
            return Err(Error::NoMatch {
                pattern: pattern.to_string(),
                base: cursor.to_path_buf(),
            });
        }
        Ok(candidates)
    }
}

/// A single-entry candidate for a path that is taken as-is.
fn literal_candidate(path: PathBuf) -> Candidate {
    let name = path.file_name().map_or_else(
        || path.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    );
    Candidate::new(name, path, MatchQuality::Exact)
}

fn step_literal(cursor: &Path, segment: &Segment) -> PathBuf {
    match segment {
        Segment::Parent => {
            let parent = normalize::ascend(cursor);
            log::debug!("'..' -> {}", parent.display());
            parent
        }
        Segment::Current | Segment::Pattern(_) => cursor.to_path_buf(),
    }
}

fn verify_directory(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::NotADirectory {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::NotADirectory {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(Error::Unreadable {
            path: path.to_path_buf(),
            source,
        }),
    }
}
