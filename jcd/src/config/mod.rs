//! Configuration system for jcd.
//!
//! This module provides layered configuration with support for:
//! - A YAML user configuration file
//! - Environment variable overrides
//! - Programmatic overrides via the builder
//! - Ignore files listing directory names to skip
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`, used for CLI flags)
//! 2. Environment variables (`JCD_*`)
//! 3. User config (`$XDG_CONFIG_HOME/jcd/config.yaml` or `JCD_CONFIG`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use jcd::config::ConfigBuilder;
//! use jcd::path::Resolver;
//!
//! let settings = ConfigBuilder::new().build().unwrap();
//! let resolver = Resolver::from_settings(&settings);
//! ```

pub mod builder;
pub mod environment;
pub mod ignore;
pub mod loader;
pub mod schema;

pub use builder::{ConfigBuilder, Settings};
pub use environment::EnvironmentConfig;
pub use ignore::IgnoreSet;
pub use loader::ConfigLoader;
pub use schema::Config;
