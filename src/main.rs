//! # Sprout CLI
//!
//! This is the binary entry point for the `sprout` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing the global options using `clap`.
//! - Wiring the real console, `git` and GitHub client into the dispatcher.
//! - Exiting with the code the dispatcher returns.
//!
//! The commands themselves live in the `sprout` library crate, so the binary
//! stays a thin wrapper that tests can bypass with their own doubles.

mod cli;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();
    std::process::exit(cli.execute())
}
