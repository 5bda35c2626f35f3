//! Configuration file discovery and loading.
//!
//! The user configuration lives at `$XDG_CONFIG_HOME/jcd/config.yaml`, or
//! `~/.config/jcd/config.yaml` when `XDG_CONFIG_HOME` is unset. `JCD_CONFIG`
//! names an explicit file instead.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "JCD_CONFIG";

/// Configuration file name inside the user config directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Loads configuration from the filesystem.
///
/// # Examples
///
/// ```no_run
/// use jcd::config::ConfigLoader;
///
/// if let Some(config) = ConfigLoader::load_user_config().unwrap() {
///     println!("listing order: {:?}", config.listing_order);
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// The jcd user config directory, if one can be determined.
    #[must_use]
    pub fn user_config_dir() -> Option<PathBuf> {
        let base = env::var_os("XDG_CONFIG_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| home::home_dir().map(|home| home.join(".config")))?;
        Some(base.join("jcd"))
    }

    /// The configuration file to load, with an explicit flag telling whether
    /// it came from `JCD_CONFIG`.
    #[must_use]
    pub fn user_config_path() -> Option<(PathBuf, bool)> {
        if let Some(explicit) = env::var_os(CONFIG_PATH_ENV).filter(|v| !v.is_empty()) {
            return Some((PathBuf::from(explicit), true));
        }
        Self::user_config_dir().map(|dir| (dir.join(CONFIG_FILE_NAME), false))
    }

    /// Load the user configuration file.
    ///
    /// A missing default file is not an error; a missing file named by
    /// `JCD_CONFIG` is.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if `JCD_CONFIG` points at a file that does not exist.
    pub fn load_user_config() -> Result<Option<Config>> {
        let Some((path, explicit)) = Self::user_config_path() else {
            return Ok(None);
        };

        if !path.exists() {
            if explicit {
                return Err(Error::InvalidPath {
                    path,
                    reason: format!("configuration file named by {CONFIG_PATH_ENV} does not exist"),
                });
            }
            log::debug!("no configuration file at {}", path.display());
            return Ok(None);
        }

        log::debug!("loading configuration from {}", path.display());
        Self::load_file(&path).map(Some)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        Config::from_yaml_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }
}
