//! Library exports for slotbook-cli.
//!
//! This module exports the CLI structure for use by the build script
//! to generate man pages and by the benchmarks.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
