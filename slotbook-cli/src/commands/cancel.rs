//! Cancel command implementation.

use clap::Args;
use slotbook::DeleteBookingRequest;

use crate::error::CliError;
use crate::utils::{open_service, GlobalOptions};

/// Cancel a booking by id.
///
/// Succeeds whether or not the booking exists.
#[derive(Args)]
pub struct CancelCommand {
    /// Booking id
    #[arg(value_name = "ID")]
    pub id: String,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let id = DeleteBookingRequest { id: self.id }.validate()?;

        let (_config, service) = open_service(global)?;
        service.cancel(id)?;

        if !global.quiet {
            eprintln!("Cancelled booking {id}");
        }

        Ok(())
    }
}
