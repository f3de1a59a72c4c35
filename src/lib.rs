//! # Sprout Library
//!
//! Core of the `sprout` project scaffolder: it creates project folders from
//! built-in templates, puts them under git and optionally creates and pushes
//! a GitHub repository for them.
//!
//! ## Quick Example
//!
//! ```
//! use chrono::NaiveDate;
//! use sprout::template::{self, Template};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
//! let set = template::render(&Template::JavaAssignment, "Demo", date);
//!
//! assert!(set.exists("README.md"));
//! assert!(set.exists("src/Main.java"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Flags (`flags`)**: a lenient `--key value` parser; unknown flags are
//!   kept and ignored.
//! - **Templates (`template`, `artifact`)**: pure rendering of a template into
//!   an in-memory set of files and directories.
//! - **Writer (`writer`)**: materializes a set on disk, never overwriting a
//!   file that already exists.
//! - **Git (`git`)**: sequences `git` subprocesses behind the
//!   `CommandExecutor` trait.
//! - **GitHub (`github`)**: creates the remote repository behind the
//!   `RemoteClient` trait and folds every answer into a `ProvisionOutcome`.
//! - **Dispatch (`dispatch`, `commands`)**: routes `new`, `web` and `gitprep`
//!   and turns fatal errors into exit code 1.
//!
//! Console access, prompts, subprocesses and HTTP are all injected through
//! `dispatch::Context`, so every command can be run against test doubles.

pub mod artifact;
pub mod commands;
pub mod console_io;
pub mod defaults;
pub mod dispatch;
pub mod error;
pub mod flags;
pub mod git;
pub mod github;
pub mod output;
pub mod template;
pub mod writer;

#[cfg(test)]
mod flags_proptest;
#[cfg(test)]
mod testing;
