//! Layered configuration builder.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::ignore::{ignore_file_paths, IgnoreSet};
use crate::config::loader::ConfigLoader;
use crate::config::schema::Config;
use crate::error::Result;
use crate::path::ListingOrder;

/// Fully resolved settings, ready to configure a resolver.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Candidate ordering.
    pub listing_order: ListingOrder,
    /// Ignore patterns from the ignore file and the config file.
    pub ignore: IgnoreSet,
    /// The ignore file the patterns were loaded from, if any.
    pub ignore_file: Option<PathBuf>,
}

/// Builds [`Settings`] from config file, environment, and overrides.
///
/// Precedence, highest first: [`ConfigBuilder::with_config`] overrides,
/// `JCD_*` environment variables, the user config file, defaults.
///
/// # Examples
///
/// ```
/// use jcd::config::{Config, ConfigBuilder};
/// use jcd::ListingOrder;
///
/// let settings = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         listing_order: Some(ListingOrder::Lexical),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(settings.listing_order, ListingOrder::Lexical);
/// assert!(settings.ignore.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// A builder that reads files and environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory searched for a project-local `.jcdignore`.
    ///
    /// Defaults to the process working directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Do not read the config file or any ignore file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not read `JCD_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Layer programmatic overrides on top of everything else.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        match &mut self.overrides {
            Some(existing) => existing.merge(config),
            None => self.overrides = Some(config),
        }
        self
    }

    /// Merge all sources into the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is unreadable or invalid, or an
    /// environment variable holds an invalid value.
    pub fn merged(&self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            if let Some(user) = ConfigLoader::load_user_config()? {
                config.merge(user);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            config.merge(overrides.clone());
        }

        Ok(config)
    }

    /// Build the resolved settings.
    ///
    /// # Errors
    ///
    /// See [`ConfigBuilder::merged`]; additionally an invalid regex in
    /// `ignore_patterns` is a `Validation` error.
    pub fn build(self) -> Result<Settings> {
        let config = self.merged()?;
        let listing_order = config.listing_order.unwrap_or_default();

        if config.bypass_ignore == Some(true) {
            log::debug!("ignore patterns bypassed");
            return Ok(Settings {
                listing_order,
                ..Settings::default()
            });
        }

        let mut ignore = IgnoreSet::empty();
        let mut ignore_file = None;

        if !self.skip_files && config.use_ignore_files != Some(false) {
            let working_dir = self.working_dir.or_else(|| env::current_dir().ok());
            let paths = ignore_file_paths(
                working_dir.as_deref(),
                ConfigLoader::user_config_dir().as_deref(),
                home::home_dir().as_deref(),
            );
            if let Some((path, set)) = IgnoreSet::load_first(&paths) {
                ignore = set;
                ignore_file = Some(path);
            }
        }

        if let Some(patterns) = &config.ignore_patterns {
            ignore.extend(IgnoreSet::from_patterns(patterns)?);
        }

        Ok(Settings {
            listing_order,
            ignore,
            ignore_file,
        })
    }
}
