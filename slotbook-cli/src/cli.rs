//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    BookCommand, CancelCommand, CompletionsCommand, InitCommand, ListCommand, ShowCommand,
};

/// Command-line tool for booking the shared car-park slot.
#[derive(Parser)]
#[command(name = "slotbook")]
#[command(version, about = "Book the shared car-park slot by date", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "SLOTBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "SLOTBOOK_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true)]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Book the slot for a date
    Book(BookCommand),

    /// List bookings in a date range
    List(ListCommand),

    /// Cancel a booking by id
    Cancel(CancelCommand),

    /// Show the booking for a date
    Show(ShowCommand),

    /// Initialize the data directory and database
    Init(InitCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
