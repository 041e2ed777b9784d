//! Show command implementation.
//!
//! This module implements the `show` command, which prints the booking for
//! a single date. A free date is reported as a semantic failure (exit 1) so
//! scripts can test availability.

use clap::Args;
use slotbook::BookingDate;

use crate::error::CliError;
use crate::utils::{open_service, print_json, GlobalOptions};

/// Show the booking for a date.
#[derive(Args)]
pub struct ShowCommand {
    /// Date to look up (YYYY-MM-DD)
    #[arg(value_name = "DATE")]
    pub date: String,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let date = BookingDate::parse_field(&self.date, "date")?;

        let (_config, service) = open_service(global)?;
        match service.lookup(date)? {
            Some(booking) => print_json(&booking),
            None => Err(CliError::SemanticFailure(format!("{date} is free"))),
        }
    }
}
