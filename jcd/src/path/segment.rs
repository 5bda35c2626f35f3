//! Path expression parsing.
//!
//! A path expression is a `/`-separated list of tokens. Each token is either
//! literal navigation (`.`, `..`) or a pattern that is matched against the
//! names of child directories.

use std::fmt;

use crate::error::{Error, Result};

/// Separator between segments of a path expression.
pub const SEPARATOR: char = '/';

/// One classified unit of a path expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// The literal `..`: ascend one level.
    Parent,
    /// The literal `.`: stay where we are.
    Current,
    /// Free text matched as a substring of child directory names.
    Pattern(String),
}

impl Segment {
    /// Returns true for `.` and `..`.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        !matches!(self, Self::Pattern(_))
    }

    /// The pattern text, if this is a pattern segment.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::Pattern(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parent => f.write_str(".."),
            Self::Current => f.write_str("."),
            Self::Pattern(text) => f.write_str(text),
        }
    }
}

/// Classifies a single token.
///
/// # Errors
///
/// Returns `MalformedExpression` for an empty token.
///
/// # Examples
///
/// ```
/// use jcd::path::{classify, Segment};
///
/// assert_eq!(classify("..").unwrap(), Segment::Parent);
/// assert_eq!(classify(".").unwrap(), Segment::Current);
/// assert_eq!(classify("src").unwrap(), Segment::Pattern("src".to_string()));
/// assert!(classify("").is_err());
/// ```
pub fn classify(token: &str) -> Result<Segment> {
    match token {
        "" => Err(Error::malformed(token, "empty segment")),
        "." => Ok(Segment::Current),
        ".." => Ok(Segment::Parent),
        text => Ok(Segment::Pattern(text.to_string())),
    }
}

/// An ordered, validated sequence of segments.
///
/// A leading `/` anchors the expression at the filesystem root; otherwise it
/// is applied relative to the starting directory.
///
/// # Examples
///
/// ```
/// use jcd::path::{PathExpression, Segment};
///
/// let expr = PathExpression::parse("../src/bin").unwrap();
/// assert!(!expr.is_anchored());
/// assert_eq!(expr.segments()[0], Segment::Parent);
/// assert_eq!(expr.len(), 3);
///
/// assert!(PathExpression::parse("a//b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpression {
    segments: Vec<Segment>,
    anchored: bool,
}

impl PathExpression {
    /// Parses a raw expression string.
    ///
    /// # Errors
    ///
    /// Returns `MalformedExpression` if the input is empty, or if splitting on
    /// `/` produces an empty segment anywhere other than a single leading
    /// root anchor (doubled, trailing, or repeated leading separators).
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(Error::malformed(raw, "expression is empty"));
        }

        let (anchored, body) = match raw.strip_prefix(SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        if anchored && body.is_empty() {
            return Ok(Self {
                segments: Vec::new(),
                anchored,
            });
        }

        let segments = body
            .split(SEPARATOR)
            .enumerate()
            .map(|(position, token)| {
                classify(token).map_err(|_| {
                    Error::malformed(raw, format!("empty segment at position {position}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { segments, anchored })
    }

    /// The segments in application order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the expression starts at the filesystem root.
    #[must_use]
    pub fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True only for the bare root expression `/`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segment the match index addresses.
    #[must_use]
    pub fn final_segment(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Whether every segment is `.` or `..`.
    #[must_use]
    pub fn is_navigation_only(&self) -> bool {
        self.segments.iter().all(Segment::is_literal)
    }
}

impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.anchored {
            f.write_str("/")?;
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for PathExpression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
