//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `JCD_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::ListingOrder;

/// Overrides the listing order.
pub const LISTING_ORDER_ENV: &str = "JCD_LISTING_ORDER";

/// Bypasses every ignore pattern when true.
pub const NO_IGNORE_ENV: &str = "JCD_NO_IGNORE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use jcd::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if any environment variable value is
    /// invalid (unknown order name, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(order) = env::var(LISTING_ORDER_ENV) {
            config.listing_order = Some(ListingOrder::parse(&order, LISTING_ORDER_ENV)?);
        }

        if let Ok(val) = env::var(NO_IGNORE_ENV) {
            config.bypass_ignore = Some(Self::parse_bool(NO_IGNORE_ENV, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from string.
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
