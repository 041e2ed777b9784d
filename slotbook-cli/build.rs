//! Build script for slotbook-cli.
//!
//! Renders the `slotbook.1` man page into `OUT_DIR/man` with clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is restated here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("slotbook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Book the shared car-park slot by date")
        .long_about(
            "Command-line tool for booking a single shared car-park slot. \
             Each calendar date can be booked at most once.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("SLOTBOOK_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("SLOTBOOK_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("book")
                .about("Book the slot for a date")
                .long_about("Book the slot for DATE (YYYY-MM-DD) and print the booking as JSON")
                .arg(Arg::new("date").value_name("DATE").required(true))
                .arg(Arg::new("name").long("name").value_name("NAME")),
            Command::new("list")
                .about("List bookings in a date range")
                .long_about("List bookings between --from and --to inclusive, ascending by date")
                .arg(Arg::new("from").long("from").value_name("DATE"))
                .arg(Arg::new("to").long("to").value_name("DATE"))
                .arg(Arg::new("format").long("format").value_name("FORMAT")),
            Command::new("cancel")
                .about("Cancel a booking by id")
                .long_about("Cancel a booking; succeeds whether or not the booking exists")
                .arg(Arg::new("id").value_name("ID").required(true)),
            Command::new("show")
                .about("Show the booking for a date")
                .long_about("Print the booking for DATE, or exit with status 1 if it is free")
                .arg(Arg::new("date").value_name("DATE").required(true)),
            Command::new("init")
                .about("Initialize the data directory and database")
                .long_about("Create the data directory, the database and optionally config.yaml"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("slotbook.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
