//! Database connection management.
//!
//! This module provides the main database handle with proper initialization
//! and PRAGMA settings for `SQLite`.

use rusqlite::{Connection, ErrorCode, OpenFlags};

use crate::error::{Error, Result};

use super::config::{DatabaseConfig, MAX_BUSY_TIMEOUT_SECONDS};

/// A database connection wrapper with configuration.
///
/// A `Database` is the store handle the booking service is built on. Each
/// handle owns one `SQLite` connection; concurrent writers (threads or
/// processes) open their own handle onto the same file and are serialized by
/// `SQLite` itself.
///
/// # Examples
///
/// ```no_run
/// use slotbook::database::{Database, DatabaseConfig};
///
/// let config = DatabaseConfig::new("/tmp/slotbook.db");
/// let db = Database::open(config).unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    config: DatabaseConfig,
}

impl Database {
    /// Opens a database connection with the given configuration.
    ///
    /// This function will:
    /// - Create the parent directory if `auto_create` is enabled
    /// - Open the database with appropriate flags
    /// - Set WAL mode for concurrent access
    /// - Configure busy timeout
    /// - Initialize or verify the database schema
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The busy timeout is longer than [`MAX_BUSY_TIMEOUT_SECONDS`]
    /// - The database file cannot be opened
    /// - The parent directory cannot be created
    /// - PRAGMA settings cannot be applied
    /// - Schema initialization or verification fails
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if config.busy_timeout.as_secs() > MAX_BUSY_TIMEOUT_SECONDS {
            return Err(Error::Validation {
                field: "busy_timeout".into(),
                message: format!("Must be at most {MAX_BUSY_TIMEOUT_SECONDS} seconds"),
            });
        }

        if config.auto_create && !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let flags = if config.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&config.path, flags)?;
        Self::configure(conn, config)
    }

    /// Opens a private in-memory database.
    ///
    /// Every call returns an isolated, empty store that disappears when the
    /// handle is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be opened or the schema
    /// cannot be created.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotbook::Database;
    ///
    /// let db = Database::open_in_memory().unwrap();
    /// assert!(db.config().path.as_os_str() == ":memory:");
    /// ```
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::configure(conn, DatabaseConfig::new(":memory:"))
    }

    fn configure(conn: Connection, config: DatabaseConfig) -> Result<Self> {
        // PRAGMA journal_mode returns a row
        let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.execute_batch("PRAGMA synchronous = NORMAL")?;
        conn.execute_batch("PRAGMA foreign_keys = ON")?;
        conn.busy_timeout(config.busy_timeout)?;

        super::migrations::check_schema_compatibility(&conn)?;

        log::debug!("opened booking database at {}", config.path.display());
        Ok(Self { conn, config })
    }

    /// Returns the configuration this handle was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Returns a reference to the underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Converts a `rusqlite` error, reporting lock contention that outlived
    /// the busy timeout as [`Error::LockTimeout`].
    pub(super) fn storage_error(&self, err: rusqlite::Error) -> Error {
        match err.sqlite_error_code() {
            Some(ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked) => Error::LockTimeout {
                millis: u64::try_from(self.config.busy_timeout.as_millis()).unwrap_or(u64::MAX),
            },
            _ => Error::Database(err),
        }
    }
}
