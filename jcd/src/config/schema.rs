//! Configuration schema definitions.
//!
//! This module defines the YAML configuration structure for jcd. Every field
//! is optional so that partial files and environment overrides can be
//! layered on top of each other.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::ListingOrder;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use jcd::config::Config;
/// use jcd::ListingOrder;
///
/// let config = Config::from_yaml_str("listing_order: lexical\n").unwrap();
/// assert_eq!(config.listing_order, Some(ListingOrder::Lexical));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How candidates are ordered before the match index is applied.
    pub listing_order: Option<ListingOrder>,

    /// Extra ignore patterns (regular expressions) on top of the ignore file.
    pub ignore_patterns: Option<Vec<String>>,

    /// Whether to look for ignore files at all. Defaults to true.
    pub use_ignore_files: Option<bool>,

    /// Disable every ignore pattern, from files and from this config.
    pub bypass_ignore: Option<bool>,
}

impl Config {
    /// Parses a YAML document. An empty document yields the default config.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error for invalid YAML or unknown fields.
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Layers `other` on top of `self`.
    ///
    /// Scalar fields set in `other` win; ignore patterns accumulate.
    pub fn merge(&mut self, other: Self) {
        if other.listing_order.is_some() {
            self.listing_order = other.listing_order;
        }
        if let Some(patterns) = other.ignore_patterns {
            self.ignore_patterns
                .get_or_insert_with(Vec::new)
                .extend(patterns);
        }
        if other.use_ignore_files.is_some() {
            self.use_ignore_files = other.use_ignore_files;
        }
        if other.bypass_ignore.is_some() {
            self.bypass_ignore = other.bypass_ignore;
        }
    }
}
