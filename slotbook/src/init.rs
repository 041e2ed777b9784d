//! Data directory initialization.
//!
//! Creates the data directory and an empty booking database, and optionally
//! writes a commented default `config.yaml`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;
use crate::database::{resolve_database_path, DEFAULT_DATABASE_FILE};
use crate::error::{Error, Result};
use crate::{Database, DatabaseConfig};

/// Options for data directory initialization.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Database file name inside the data directory, or an absolute path.
    pub database_file: String,
    /// Replace an existing database with an empty one.
    pub overwrite: bool,
    /// Create a default configuration file.
    pub create_config: bool,
}

impl InitOptions {
    /// Creates new initialization options.
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            database_file: DEFAULT_DATABASE_FILE.to_string(),
            overwrite: false,
            create_config: false,
        }
    }

    /// Sets the database file name.
    #[must_use]
    pub fn with_database_file(mut self, database_file: impl Into<String>) -> Self {
        self.database_file = database_file.into();
        self
    }

    /// Sets whether to overwrite existing database.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to create default configuration file.
    #[must_use]
    pub fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }
}

/// Result of initialization operation.
#[derive(Debug)]
pub struct InitResult {
    /// Whether the data directory was created.
    pub data_dir_created: bool,
    /// Whether the database was created or recreated.
    pub database_created: bool,
    /// Whether a configuration file was created.
    pub config_created: bool,
    /// Path to the data directory.
    pub data_dir: PathBuf,
    /// Path to the database file.
    pub database_path: PathBuf,
}

/// Default configuration template, every key commented out.
const DEFAULT_CONFIG_TEMPLATE: &str = r"# slotbook configuration file

# Database file inside the data directory (default: slotbook.db)
# database_file: slotbook.db

# Maximum lock wait time in seconds (default: 5)
# maximum_lock_wait_seconds: 5

# Days shown by `slotbook list` without --to (default: 60)
# list_window_days: 60

# Output format for `slotbook list`: table, json, csv or tsv (default: table)
# output_format: table

# Refuse to create the database on first use (default: false)
# disable_autoinit: false
";

/// Initializes the data directory and booking database.
///
/// # Errors
///
/// Returns an error if:
/// - The data directory cannot be created
/// - The database already exists and `overwrite` is false
/// - The database cannot be created
/// - The configuration file cannot be written
///
/// # Examples
///
/// ```no_run
/// use slotbook::init::{init_data_dir, InitOptions};
/// use std::path::PathBuf;
///
/// let options = InitOptions::new(PathBuf::from("/tmp/slotbook-test")).with_create_config(true);
/// let result = init_data_dir(&options).unwrap();
/// println!("database at {}", result.database_path.display());
/// ```
pub fn init_data_dir(options: &InitOptions) -> Result<InitResult> {
    let db_path = resolve_database_path(&options.data_dir, &options.database_file);
    let mut result = InitResult {
        data_dir_created: false,
        database_created: false,
        config_created: false,
        data_dir: options.data_dir.clone(),
        database_path: db_path.clone(),
    };

    if !options.data_dir.exists() {
        fs::create_dir_all(&options.data_dir)?;
        result.data_dir_created = true;
    }

    if db_path.exists() {
        if !options.overwrite {
            return Err(Error::Validation {
                field: "database".into(),
                message: format!(
                    "Database already exists at {}. Use --overwrite to replace it.",
                    db_path.display()
                ),
            });
        }
        remove_database_files(&db_path)?;
        log::warn!("replaced existing database at {}", db_path.display());
    }

    Database::open(DatabaseConfig::new(&db_path))?;
    result.database_created = true;

    if options.create_config {
        let config_path = options.data_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
            result.config_created = true;
        }
    }

    log::info!("initialized data directory {}", options.data_dir.display());
    Ok(result)
}

/// Removes a database file together with its WAL side files.
fn remove_database_files(db_path: &Path) -> Result<()> {
    fs::remove_file(db_path)?;
    for suffix in ["-wal", "-shm"] {
        let mut side = db_path.as_os_str().to_owned();
        side.push(suffix);
        let side = PathBuf::from(side);
        if side.exists() {
            fs::remove_file(side)?;
        }
    }
    Ok(())
}
