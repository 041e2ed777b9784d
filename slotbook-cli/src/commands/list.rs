//! List command implementation.
//!
//! This module implements the `list` command, which displays bookings in a
//! date range in various formats (table, JSON, CSV, TSV).

use std::io::Write;

use clap::Args;
use slotbook::{
    Booking, BookingDate, BookingService, DateRange, ListBookingsRequest, OutputFormat,
};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, print_json, GlobalOptions};

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 4] = ["id", "date", "name", "created_at"];

/// List bookings in a date range.
#[derive(Args)]
pub struct ListCommand {
    /// First date to include (default: today)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Last date to include (default: first date + list_window_days)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Output format: table, json, csv or tsv
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        // Validate before touching the data directory
        let range = match (self.from, self.to) {
            (Some(from), Some(to)) => ListBookingsRequest { from, to }.validate()?,
            (from, to) => {
                let start = match from {
                    Some(from) => BookingDate::parse_field(&from, "from")?,
                    None => BookingDate::today(),
                };
                match to {
                    Some(to) => DateRange::new(start, BookingDate::parse_field(&to, "to")?)?,
                    None => DateRange::window_from(start, config.list_window_days())?,
                }
            }
        };

        let service = BookingService::new(open_database(global, &config)?);
        let bookings = service.list(&range)?;

        match self.format.unwrap_or_else(|| config.output_format()) {
            OutputFormat::Table => format_as_table(&bookings),
            OutputFormat::Json => print_json(&bookings),
            OutputFormat::Csv => format_as_delimited(&bookings, b','),
            OutputFormat::Tsv => format_as_delimited(&bookings, b'\t'),
        }
    }
}

fn created_at_text(booking: &Booking) -> String {
    booking
        .created_at()
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Format bookings as a human-readable table.
fn format_as_table(bookings: &[Booking]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for booking in bookings {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}",
            booking.id(),
            booking.date(),
            booking.name().map_or("-", |n| n.as_str()),
            created_at_text(booking),
        )?;
    }

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Format bookings as delimited output (CSV or TSV).
fn format_as_delimited(bookings: &[Booking], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for booking in bookings {
        writer
            .write_record([
                booking.id().to_string(),
                booking.date().to_string(),
                booking.name().map_or_else(String::new, ToString::to_string),
                created_at_text(booking),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
