#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # jcd
//!
//! A library for resolving abbreviated directory expressions.
//!
//! An expression such as `../pro/src` is split on `/`; `.` and `..` navigate
//! as usual and every other segment is a substring pattern matched against
//! the names of child directories. When the final segment matches several
//! directories, a zero-based index selects among them.
//!
//! ## Core Types
//!
//! - [`PathExpression`] and [`Segment`]: Parsed expressions
//! - [`Resolver`]: Walks an expression against the filesystem
//! - [`ConfigBuilder`] and [`Settings`]: Layered configuration
//! - [`IgnoreSet`]: Directory names never offered as candidates
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use jcd::{PathExpression, Segment};
//!
//! let expr = PathExpression::parse("../src").unwrap();
//! assert_eq!(expr.segments()[0], Segment::Parent);
//! assert_eq!(expr.final_segment(), Some(&Segment::Pattern("src".to_string())));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

#[cfg(test)]
mod test_util;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, IgnoreSet, Settings};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    Candidate, CaseSensitivity, ListingOrder, MatchQuality, PathExpression, Resolver, Segment,
};
