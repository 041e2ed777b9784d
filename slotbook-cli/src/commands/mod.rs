//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `book`: Book the slot for a date
//! - `list`: List bookings in a date range
//! - `cancel`: Cancel a booking by id
//! - `show`: Show the booking for a date
//! - `init`: Initialize the data directory and database
//! - `completions`: Generate shell completion scripts

pub mod book;
pub mod cancel;
pub mod completions;
pub mod init;
pub mod list;
pub mod show;

pub use book::BookCommand;
pub use cancel::CancelCommand;
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use show::ShowCommand;
