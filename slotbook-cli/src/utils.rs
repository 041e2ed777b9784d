//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! data directory resolution, configuration loading, database access and
//! JSON output.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;
use slotbook::database::{resolve_data_dir, resolve_database_path, MAX_BUSY_TIMEOUT_SECONDS};
use slotbook::{BookingService, Config, ConfigBuilder, Database, DatabaseConfig};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Resolve the data directory.
///
/// Priority: `--data-dir` (or `SLOTBOOK_DATA_DIR` via clap) > `~/.slotbook`.
pub fn resolve_data_directory(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref dir) => Ok(dir.clone()),
        None => resolve_data_dir().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority, applied by callers)
/// 2. Environment variables
/// 3. `<data-dir>/config.yaml`
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_directory(global)?;
    log::debug!("Loading configuration from {}", data_dir.display());

    ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open database with configuration.
///
/// # Errors
///
/// Returns `InvalidArguments` if `--busy-timeout` is out of range, and
/// `NoDataDirectory` if the database doesn't exist and auto-init is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    if let Some(timeout_seconds) = global.busy_timeout {
        if u64::from(timeout_seconds) > MAX_BUSY_TIMEOUT_SECONDS {
            return Err(CliError::InvalidArguments(format!(
                "--busy-timeout must be at most {MAX_BUSY_TIMEOUT_SECONDS} seconds"
            )));
        }
    }

    let data_dir = resolve_data_directory(global)?;
    let db_path = resolve_database_path(&data_dir, config.database_file());

    let autoinit_disabled = global.disable_autoinit || config.disable_autoinit == Some(true);
    if !db_path.exists() && autoinit_disabled {
        return Err(CliError::NoDataDirectory);
    }

    log::debug!("Opening database at {}", db_path.display());
    let mut db_config = DatabaseConfig::new(db_path);

    if let Some(timeout_seconds) = global.busy_timeout {
        db_config = db_config.with_busy_timeout(Duration::from_secs(timeout_seconds.into()));
    } else if let Some(timeout_seconds) = config.maximum_lock_wait_seconds {
        db_config = db_config.with_busy_timeout(Duration::from_secs(timeout_seconds));
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Load configuration and open a booking service in one step.
pub fn open_service(global: &GlobalOptions) -> Result<(Config, BookingService), CliError> {
    let config = load_configuration(global)?;
    let db = open_database(global, &config)?;
    Ok((config, BookingService::new(db)))
}

/// Write a value to stdout as pretty JSON followed by a newline.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, value)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(handle)?;

    Ok(())
}
