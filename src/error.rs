//! # Error Handling
//!
//! This module defines the error type shared by the `sprout` library. It uses
//! `thiserror` to describe every failure mode the provisioning workflow can
//! hit, each with enough context to print a useful message at the top-level
//! error boundary.
//!
//! The variants follow how each failure is treated:
//!
//! - **Fatal**: `UserInput`, `Filesystem`, `GitCommand` and `Io` abort the
//!   current command and surface as exit code 1.
//! - **Recovered**: `Network` and `Api` only ever come out of the GitHub
//!   client. The provisioner turns them into a logged outcome and the command
//!   keeps its local-only state.

use thiserror::Error;

/// Main error type for sprout operations
#[derive(Error, Debug)]
pub enum Error {
    /// The command line is missing something the command needs, such as a
    /// project name or an existing target path.
    #[error("{message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    UserInput {
        message: String,
        /// Optional hint for how to fix the invocation
        hint: Option<String>,
    },

    /// Creating a directory or writing a scaffolded file failed.
    #[error("Filesystem operation error: {path}: {message}")]
    Filesystem { path: String, message: String },

    /// A `git` subprocess could not be started or exited unsuccessfully.
    #[error("Git command failed: {command} - {message}")]
    GitCommand { command: String, message: String },

    /// The forge API could not be reached.
    #[error("Network operation error: {url} - {message}")]
    Network { url: String, message: String },

    /// The forge API answered with a status sprout does not accept.
    #[error("GitHub API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A URL parsing error, wrapped from `url::ParseError`.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Shorthand for a `UserInput` error without a hint.
    pub fn user_input(message: impl Into<String>) -> Self {
        Error::UserInput {
            message: message.into(),
            hint: None,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_user_input() {
        let error = Error::user_input("Project name cannot be blank");
        let display = format!("{}", error);
        assert_eq!(display, "Project name cannot be blank");
    }

    #[test]
    fn test_error_display_user_input_with_hint() {
        let error = Error::UserInput {
            message: "--github needs a value".to_string(),
            hint: Some("Pass your GitHub username, e.g. --github octocat".to_string()),
        };
        let display = format!("{}", error);
        assert!(display.contains("--github needs a value"));
        assert!(display.contains("hint:"));
        assert!(display.contains("--github octocat"));
    }

    #[test]
    fn test_error_display_filesystem() {
        let error = Error::Filesystem {
            path: "Demo/src/Main.java".to_string(),
            message: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Filesystem operation error"));
        assert!(display.contains("Demo/src/Main.java"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_error_display_git_command() {
        let error = Error::GitCommand {
            command: "git push -u origin main".to_string(),
            message: "exited with status 128".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Git command failed"));
        assert!(display.contains("git push -u origin main"));
        assert!(display.contains("128"));
    }

    #[test]
    fn test_error_display_network() {
        let error = Error::Network {
            url: "https://api.github.com/user/repos".to_string(),
            message: "Connection refused".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Network operation error"));
        assert!(display.contains("https://api.github.com/user/repos"));
        assert!(display.contains("Connection refused"));
    }

    #[test]
    fn test_error_display_api() {
        let error = Error::Api {
            status: 500,
            body: "{\"message\":\"Server Error\"}".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("500"));
        assert!(display.contains("Server Error"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();
        let display = format!("{}", error);
        assert!(display.contains("I/O error"));
        assert!(display.contains("File not found"));
    }

    #[test]
    fn test_error_from_url_parse() {
        let parse_error = url::Url::parse("not a url").unwrap_err();
        let error: Error = parse_error.into();
        assert!(format!("{}", error).contains("URL parsing error"));
    }
}
