//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `SLOTBOOK_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use slotbook::config::{Config, EnvironmentConfig};
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
    /// Returns an error if any environment variable value is invalid
    /// (e.g., a non-numeric window, an unknown output format).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(file) = env::var("SLOTBOOK_DATABASE_FILE") {
            config.database_file = Some(file);
        }

        if let Ok(seconds) = env::var("SLOTBOOK_MAXIMUM_LOCK_WAIT_SECONDS") {
            config.maximum_lock_wait_seconds =
                Some(seconds.parse().map_err(|_| Error::Validation {
                    field: "SLOTBOOK_MAXIMUM_LOCK_WAIT_SECONDS".into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        if let Ok(days) = env::var("SLOTBOOK_LIST_WINDOW_DAYS") {
            config.list_window_days = Some(days.parse().map_err(|_| Error::Validation {
                field: "SLOTBOOK_LIST_WINDOW_DAYS".into(),
                message: "Must be a positive integer".into(),
            })?);
        }

        if let Ok(format) = env::var("SLOTBOOK_OUTPUT_FORMAT") {
            config.output_format = Some(format.parse::<OutputFormat>().map_err(|message| {
                Error::Validation {
                    field: "SLOTBOOK_OUTPUT_FORMAT".into(),
                    message,
                }
            })?);
        }

        if let Ok(val) = env::var("SLOTBOOK_DISABLE_AUTOINIT") {
            config.disable_autoinit = Some(Self::parse_bool("SLOTBOOK_DISABLE_AUTOINIT", &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
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
