//! Utility functions for CLI operations.

use crate::error::CliError;
use jcd::{Config, ConfigBuilder, Settings};
use std::env;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress diagnostics.
    pub quiet: bool,
}

/// The process working directory, the starting point of every resolution.
pub fn current_dir() -> Result<PathBuf, CliError> {
    Ok(env::current_dir()?)
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line flags (`overrides`, highest priority)
/// 2. Environment variables
/// 3. Configuration file
/// 4. Built-in defaults (lowest priority)
///
/// `working_dir` is where a project-local `.jcdignore` is looked up.
pub fn load_settings(working_dir: &Path, overrides: Config) -> Result<Settings, CliError> {
    ConfigBuilder::new()
        .with_working_dir(working_dir)
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}
