//! Book command implementation.
//!
//! This module implements the `book` command, which books the slot for one
//! date and prints the created booking as JSON.

use clap::Args;
use slotbook::CreateBookingRequest;

use crate::error::CliError;
use crate::utils::{open_service, print_json, GlobalOptions};

/// Book the slot for a date.
#[derive(Args)]
pub struct BookCommand {
    /// Date to book (YYYY-MM-DD)
    #[arg(value_name = "DATE")]
    pub date: String,

    /// Who the slot is for
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Validate before touching the data directory
        let request = CreateBookingRequest {
            date: self.date,
            name: self.name,
        };
        let valid = request.validate()?;

        let (_config, service) = open_service(global)?;
        let booking = service.create(valid.date, valid.name)?;

        print_json(&booking)
    }
}
