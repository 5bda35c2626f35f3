//! Ignore patterns for candidate listing.
//!
//! An ignore file holds one regular expression per line; blank lines and
//! lines starting with `#` are skipped. A directory whose name matches any
//! pattern is never offered as a candidate for a pattern segment.
//!
//! Only the first ignore file found is used. Lookup order:
//!
//! 1. `<working dir>/.jcdignore`
//! 2. `<user config dir>/jcd/ignore`
//! 3. `~/.jcdignore`
//! 4. `/etc/jcd/ignore`

use std::fs;
use std::path::{Path, PathBuf};

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};

/// Upper bound on patterns loaded from one ignore file.
pub const MAX_IGNORE_PATTERNS: usize = 100;

/// Compiled size limit for a single pattern.
pub const MAX_COMPILED_REGEX_SIZE: usize = 1_000_000;

/// Project-local ignore file name.
pub const LOCAL_IGNORE_FILE: &str = ".jcdignore";

/// System-wide ignore file.
pub const SYSTEM_IGNORE_FILE: &str = "/etc/jcd/ignore";

/// A set of compiled ignore patterns.
///
/// # Examples
///
/// ```
/// use jcd::IgnoreSet;
///
/// let set = IgnoreSet::parse("# build output\n^target$\nnode_modules\n");
/// assert_eq!(set.len(), 2);
/// assert!(set.is_ignored("target"));
/// assert!(!set.is_ignored("target2"));
/// assert!(set.is_ignored("my_node_modules"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    patterns: Vec<Regex>,
}

impl IgnoreSet {
    /// An empty set that ignores nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses ignore file content.
    ///
    /// Invalid expressions and lines beyond [`MAX_IGNORE_PATTERNS`] are
    /// skipped and logged at debug level; the remaining lines still load.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut patterns = Vec::new();

        for line in content.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match compile(line) {
                Ok(regex) if patterns.len() < MAX_IGNORE_PATTERNS => patterns.push(regex),
                Ok(_) => {
                    log::debug!(
                        "ignored pattern due to max pattern count ({MAX_IGNORE_PATTERNS}): '{line}'"
                    );
                }
                Err(e) => log::debug!("invalid ignore pattern '{line}': {e}"),
            }
        }

        Self { patterns }
    }

    /// Compiles patterns given programmatically (e.g. from the config file).
    ///
    /// # Errors
    ///
    /// Unlike [`IgnoreSet::parse`], an invalid expression is an error here.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                compile(p).map_err(|e| Error::Validation {
                    field: "ignore_patterns".to_string(),
                    message: format!("invalid pattern '{p}': {e}"),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Reads and parses one ignore file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Loads the first ignore file that exists among `candidates`.
    ///
    /// Returns the path it came from alongside the set, or `None` when no
    /// file could be read.
    #[must_use]
    pub fn load_first(candidates: &[PathBuf]) -> Option<(PathBuf, Self)> {
        for path in candidates {
            log::debug!("checking ignore file: {}", path.display());
            match Self::from_file(path) {
                Ok(set) => {
                    log::debug!(
                        "loaded {} ignore pattern(s) from {}",
                        set.len(),
                        path.display()
                    );
                    return Some((path.clone(), set));
                }
                Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => log::debug!("skipping ignore file {}: {e}", path.display()),
            }
        }
        log::debug!("no ignore file found");
        None
    }

    /// Appends the patterns of another set.
    pub fn extend(&mut self, other: Self) {
        self.patterns.extend(other.patterns);
    }

    /// Whether a directory name should be skipped.
    #[must_use]
    pub fn is_ignored(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(name))
    }

    /// Number of loaded patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True when nothing is ignored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn compile(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .size_limit(MAX_COMPILED_REGEX_SIZE)
        .build()
}

/// Ignore file locations in priority order.
///
/// `working_dir` is where the project-local file is looked up, `config_dir`
/// the jcd user config directory (see
/// [`crate::config::ConfigLoader::user_config_dir`]) and `home` the user's
/// home directory; any of them may be missing.
#[must_use]
pub fn ignore_file_paths(
    working_dir: Option<&Path>,
    config_dir: Option<&Path>,
    home: Option<&Path>,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dir) = working_dir {
        paths.push(dir.join(LOCAL_IGNORE_FILE));
    }
    if let Some(dir) = config_dir {
        paths.push(dir.join("ignore"));
    }
    if let Some(home) = home {
        paths.push(home.join(LOCAL_IGNORE_FILE));
    }
    paths.push(PathBuf::from(SYSTEM_IGNORE_FILE));
    paths
}
