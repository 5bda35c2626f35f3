//! Candidate listing for pattern segments.
//!
//! Lists the immediate child directories of a base directory whose names
//! contain a pattern, honouring the case-sensitivity policy, the ignore set,
//! and the listing order.

use std::fs::{self, DirEntry};
use std::io;
use std::path::Path;

use crate::config::IgnoreSet;
use crate::error::{Error, Result};
use crate::path::types::{CaseSensitivity, Candidate, ListingOrder, MatchQuality};

/// Lists and filters child directories.
///
/// # Examples
///
/// ```no_run
/// use jcd::path::CandidateLister;
/// use jcd::{CaseSensitivity, ListingOrder};
/// use std::path::Path;
///
/// let lister = CandidateLister::new()
///     .with_case_sensitivity(CaseSensitivity::Insensitive)
///     .with_listing_order(ListingOrder::Lexical);
///
/// for candidate in lister.list(Path::new("/usr"), "LO").unwrap() {
///     println!("{}", candidate.path().display());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CandidateLister {
    case: CaseSensitivity,
    order: ListingOrder,
    ignore: IgnoreSet,
}

impl CandidateLister {
    /// A case-sensitive lister in filesystem order that ignores nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the case-sensitivity policy.
    #[must_use]
    pub fn with_case_sensitivity(mut self, case: CaseSensitivity) -> Self {
        self.case = case;
        self
    }

    /// Sets the listing order.
    #[must_use]
    pub fn with_listing_order(mut self, order: ListingOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets the ignore patterns.
    #[must_use]
    pub fn with_ignore_set(mut self, ignore: IgnoreSet) -> Self {
        self.ignore = ignore;
        self
    }

    /// The case-sensitivity policy in effect.
    #[must_use]
    pub fn case_sensitivity(&self) -> CaseSensitivity {
        self.case
    }

    /// The listing order in effect.
    #[must_use]
    pub fn listing_order(&self) -> ListingOrder {
        self.order
    }

    /// Lists the child directories of `base` whose names contain `pattern`.
    ///
    /// Entries that are not directories, or whose metadata cannot be read,
    /// are skipped. An empty result is not an error here; the resolver turns
    /// it into `NoMatch`.
    ///
    /// # Errors
    ///
    /// - `NotADirectory` if `base` is missing or not a directory
    /// - `Unreadable` if `base` cannot be listed for any other reason
    pub fn list(&self, base: &Path, pattern: &str) -> Result<Vec<Candidate>> {
        let entries = fs::read_dir(base).map_err(|e| listing_error(base, e))?;
        let folded_pattern = self.case.fold(pattern);

        let mut candidates = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::debug!("skipping unreadable entry in {}: {e}", base.display());
                    continue;
                }
            };

            if !is_directory(&entry) {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if self.ignore.is_ignored(&name) {
                log::debug!("ignoring directory: {name}");
                continue;
            }

            if let Some(quality) = MatchQuality::grade(&self.case.fold(&name), &folded_pattern) {
                candidates.push(Candidate::new(name, entry.path(), quality));
            }
        }

        self.sort(&mut candidates);
        log::debug!(
            "{} candidate(s) for '{pattern}' in {} ({} order)",
            candidates.len(),
            base.display(),
            self.order
        );
        Ok(candidates)
    }

    fn sort(&self, candidates: &mut [Candidate]) {
        match self.order {
            ListingOrder::Filesystem => {}
            ListingOrder::Lexical => {
                candidates.sort_by(|a, b| a.path().file_name().cmp(&b.path().file_name()));
            }
            ListingOrder::Quality => candidates.sort_by_key(Candidate::quality),
        }
    }
}

/// Whether an entry is a directory, following symlinks.
fn is_directory(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Ok(ft) if ft.is_dir() => true,
        Ok(ft) if ft.is_symlink() => fs::metadata(entry.path()).is_ok_and(|m| m.is_dir()),
        Ok(_) => false,
        Err(e) => {
            log::debug!("skipping {}: {e}", entry.path().display());
            false
        }
    }
}

fn listing_error(base: &Path, err: io::Error) -> Error {
    match err.kind() {
        io::ErrorKind::NotFound => Error::NotADirectory {
            path: base.to_path_buf(),
        },
        // ENOTDIR has no stable ErrorKind on older toolchains.
        _ if base.exists() && !base.is_dir() => Error::NotADirectory {
            path: base.to_path_buf(),
        },
        _ => Error::Unreadable {
            path: base.to_path_buf(),
            source: err,
        },
    }
}
