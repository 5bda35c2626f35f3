//! Path expression parsing and resolution.
//!
//! # Key Concepts
//!
//! ## Expressions
//!
//! A path expression is split on `/` into segments:
//! - `..` ascends one level, staying at the root when already there
//! - `.` stays in place
//! - anything else is a pattern matched as a substring of child directory
//!   names
//!
//! A leading `/` anchors the expression at the filesystem root.
//!
//! ## Candidates
//!
//! A pattern segment lists the child directories of the cursor whose names
//! contain the pattern. Only the final segment's candidates can be selected
//! by index; earlier pattern segments always take the first candidate.
//!
//! # Examples
//!
//! ```no_run
//! use jcd::path::Resolver;
//! use std::path::Path;
//!
//! let resolver = Resolver::new();
//!
//! // Second directory under /usr whose name contains "li"
//! let dir = resolver.resolve_str("/usr/li", Path::new("/"), 1).unwrap();
//! ```

pub mod candidates;
pub mod normalize;
pub mod resolver;
pub mod segment;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use candidates::CandidateLister;
pub use resolver::Resolver;
pub use segment::{classify, PathExpression, Segment};
pub use types::{Candidate, CaseSensitivity, ListingOrder, MatchQuality};
