//! Configuration schema definitions.
//!
//! This module defines the configuration structure for slotbook. Every field
//! is optional so that partial configurations from several sources can be
//! layered on top of each other; accessors fill in the built-in defaults.

use serde::{Deserialize, Serialize};

use crate::database::DEFAULT_DATABASE_FILE;

/// Default number of days shown by a listing without explicit bounds.
pub const DEFAULT_LIST_WINDOW_DAYS: u32 = 60;

/// Largest accepted listing window, roughly ten years.
pub const MAX_LIST_WINDOW_DAYS: u32 = 3660;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use slotbook::config::{Config, OutputFormat};
///
/// let config = Config {
///     list_window_days: Some(14),
///     output_format: Some(OutputFormat::Json),
///     ..Default::default()
/// };
/// assert_eq!(config.list_window_days(), 14);
/// assert_eq!(config.database_file(), "slotbook.db");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database file name inside the data directory, or an absolute path.
    pub database_file: Option<String>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Number of days listed when no explicit range is given.
    pub list_window_days: Option<u32>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,
}

impl Config {
    /// Returns the configured database file, or the default.
    #[must_use]
    pub fn database_file(&self) -> &str {
        self.database_file
            .as_deref()
            .unwrap_or(DEFAULT_DATABASE_FILE)
    }

    /// Returns the configured listing window, or the default.
    #[must_use]
    pub fn list_window_days(&self) -> u32 {
        self.list_window_days.unwrap_or(DEFAULT_LIST_WINDOW_DAYS)
    }

    /// Returns the configured output format, or [`OutputFormat::Table`].
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Output format for list commands.
///
/// # Examples
///
/// ```
/// use slotbook::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// assert_eq!("tsv".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            _ => Err(format!(
                "unknown output format '{s}' (expected table, json, csv or tsv)"
            )),
        }
    }
}
