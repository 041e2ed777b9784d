//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the slotbook data directory and database.

use clap::Args;
use slotbook::config::CONFIG_FILE_NAME;
use slotbook::database::resolve_database_path;
use slotbook::init::{init_data_dir, InitOptions};

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_data_directory, GlobalOptions};

/// Initialize the data directory and database.
#[derive(Args)]
pub struct InitCommand {
    /// Replace an existing database with an empty one
    #[arg(long)]
    pub overwrite: bool,

    /// Create default configuration file
    #[arg(long)]
    pub with_config: bool,

    /// Preview actions without executing
    #[arg(long)]
    pub dry_run: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// `--disable-autoinit` is ignored here; creating the database is the
    /// whole point of this command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = resolve_data_directory(global)?;
        let config = load_configuration(global)?;
        let db_path = resolve_database_path(&data_dir, config.database_file());

        if self.dry_run {
            println!("Dry-run mode: no changes will be made");
            println!();
            println!("Would initialize slotbook in: {}", data_dir.display());

            if data_dir.exists() {
                println!("  - Data directory already exists: {}", data_dir.display());
            } else {
                println!("  - Create data directory: {}", data_dir.display());
            }

            if db_path.exists() {
                if self.overwrite {
                    println!("  - Replace existing database: {}", db_path.display());
                } else {
                    println!(
                        "  - ERROR: Database already exists (use --overwrite to replace): {}",
                        db_path.display()
                    );
                }
            } else {
                println!("  - Create database: {}", db_path.display());
            }

            if self.with_config {
                let config_path = data_dir.join(CONFIG_FILE_NAME);
                if config_path.exists() {
                    println!(
                        "  - Configuration file already exists (will not overwrite): {}",
                        config_path.display()
                    );
                } else {
                    println!("  - Create configuration file: {}", config_path.display());
                }
            }

            return Ok(());
        }

        let options = InitOptions::new(data_dir)
            .with_database_file(config.database_file())
            .with_overwrite(self.overwrite)
            .with_create_config(self.with_config);

        let result = init_data_dir(&options)?;

        println!("Initialized slotbook in: {}", result.data_dir.display());

        if result.data_dir_created {
            println!("  - Created data directory");
        }

        if result.database_created {
            if self.overwrite {
                println!("  - Recreated database");
            } else {
                println!("  - Created database");
            }
        }

        if result.config_created {
            println!("  - Created default configuration file");
        } else if self.with_config {
            println!("  - Configuration file already exists (not overwritten)");
        }

        Ok(())
    }
}
