//! Database configuration and connection parameters.
//!
//! This module provides configuration types for database connections,
//! including path resolution and connection parameters.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Default database file name inside the data directory.
pub const DEFAULT_DATABASE_FILE: &str = "slotbook.db";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "SLOTBOOK_DATA_DIR";

/// Longest busy timeout `SQLite` accepts, in whole seconds.
///
/// The timeout is handed to `SQLite` as an `i32` count of milliseconds.
pub const MAX_BUSY_TIMEOUT_SECONDS: u64 = 2_147_483;

/// Configuration for database connections.
///
/// # Examples
///
/// ```
/// use slotbook::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/slotbook.db")
///     .with_busy_timeout(Duration::from_millis(10000));
/// assert_eq!(config.busy_timeout, Duration::from_millis(10000));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
    /// Whether to automatically create the database if it doesn't exist.
    pub auto_create: bool,
    /// Whether to open the database in read-only mode.
    pub read_only: bool,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default settings.
    ///
    /// Default settings:
    /// - `busy_timeout`: 5000ms
    /// - `auto_create`: true
    /// - `read_only`: false
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
            auto_create: true,
            read_only: false,
        }
    }

    /// Sets the busy timeout duration.
    ///
    /// The busy timeout determines how long a statement waits on a locked
    /// database before failing with [`Error::LockTimeout`].
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Configures the database to be opened in read-only mode.
    ///
    /// When read-only is enabled, `auto_create` is automatically disabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotbook::database::DatabaseConfig;
    ///
    /// let config = DatabaseConfig::new("/tmp/slotbook.db").read_only();
    /// assert!(config.read_only);
    /// assert!(!config.auto_create);
    /// ```
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// Returns the default data directory, `~/.slotbook`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "home_directory".into(),
        message: "Cannot determine home directory".into(),
    })?;
    Ok(home.join(".slotbook"))
}

/// Resolves the data directory using the environment or the default.
///
/// The resolution order is:
/// 1. `$SLOTBOOK_DATA_DIR` if set
/// 2. `~/.slotbook` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined and
/// `SLOTBOOK_DATA_DIR` is not set.
pub fn resolve_data_dir() -> Result<PathBuf> {
    match std::env::var(DATA_DIR_ENV) {
        Ok(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => default_data_dir(),
    }
}

/// Resolves the database path for a data directory.
///
/// `database_file` may be a bare file name (joined onto `data_dir`) or an
/// absolute path, which is used as is.
///
/// # Examples
///
/// ```
/// use slotbook::database::resolve_database_path;
/// use std::path::{Path, PathBuf};
///
/// let path = resolve_database_path(Path::new("/data"), "bookings.db");
/// assert_eq!(path, PathBuf::from("/data/bookings.db"));
/// ```
#[must_use]
pub fn resolve_database_path(data_dir: &Path, database_file: &str) -> PathBuf {
    let file = Path::new(database_file);
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        data_dir.join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_new() {
        let config = DatabaseConfig::new("/tmp/test.db");
        assert_eq!(config.path, PathBuf::from("/tmp/test.db"));
        assert_eq!(config.busy_timeout, Duration::from_millis(5000));
        assert!(config.auto_create);
        assert!(!config.read_only);
    }

    #[test]
    fn test_config_read_only() {
        let config = DatabaseConfig::new("/tmp/test.db").read_only();
        assert!(config.read_only);
        assert!(!config.auto_create);
    }

    #[test]
    fn test_resolve_database_path_relative() {
        let path = resolve_database_path(Path::new("/data"), DEFAULT_DATABASE_FILE);
        assert_eq!(path, PathBuf::from("/data/slotbook.db"));
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_database_path_absolute() {
        let path = resolve_database_path(Path::new("/data"), "/elsewhere/b.db");
        assert_eq!(path, PathBuf::from("/elsewhere/b.db"));
    }

    #[test]
    #[serial]
    fn test_resolve_data_dir() {
        let saved = std::env::var(DATA_DIR_ENV).ok();

        std::env::set_var(DATA_DIR_ENV, "/custom/data");
        assert_eq!(resolve_data_dir().unwrap(), PathBuf::from("/custom/data"));

        std::env::remove_var(DATA_DIR_ENV);
        if let Ok(dir) = resolve_data_dir() {
            assert!(dir.ends_with(".slotbook"));
        }

        if let Some(val) = saved {
            std::env::set_var(DATA_DIR_ENV, val);
        }
    }
}
