//! # Output Configuration
//!
//! This module provides utilities for controlling CLI output appearance,
//! including color and emoji support based on terminal capabilities and
//! user preferences.
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sprout::output::{Marker, OutputConfig};
//!
//! let config = OutputConfig::from_env_and_flag("auto");
//! println!("{}", config.status_line(Marker::Folder, "Creating folder: Demo"));
//! ```

use std::env;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// # Arguments
    /// * `color_flag` - The value of the --color CLI flag: "always", "never", or "auto"
    ///
    /// In auto mode, colors are disabled if:
    /// - `NO_COLOR` environment variable is set (any value, including empty)
    /// - `CLICOLOR=0` is set
    /// - `TERM=dumb` is set
    /// - stdout is not a TTY (unless `CLICOLOR_FORCE=1`)
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Create a configuration with colors always enabled.
    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Prefix of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Sprout,
    Folder,
    Template,
    Git,
    Remote,
    Warn,
    Done,
}

impl Marker {
    pub fn emoji(self) -> &'static str {
        match self {
            Marker::Sprout => "🌱",
            Marker::Folder => "📁",
            Marker::Template => "🧩",
            Marker::Git => "🌿",
            Marker::Remote => "☁️",
            Marker::Warn => "⚠️",
            Marker::Done => "✅",
        }
    }

    /// ASCII stand-in for terminals without emoji.
    pub fn plain(self) -> &'static str {
        match self {
            Marker::Sprout => "[sprout]",
            Marker::Folder => "[dir]",
            Marker::Template => "[template]",
            Marker::Git => "[git]",
            Marker::Remote => "[github]",
            Marker::Warn => "[warn]",
            Marker::Done => "[done]",
        }
    }
}

impl OutputConfig {
    /// The marker as it should be printed under this configuration.
    pub fn marker(&self, marker: Marker) -> &'static str {
        if self.use_color {
            marker.emoji()
        } else {
            marker.plain()
        }
    }

    /// `<marker> <text>`
    pub fn status_line(&self, marker: Marker, text: &str) -> String {
        format!("{} {}", self.marker(marker), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_color_always() {
        let config = OutputConfig::from_env_and_flag("always");
        assert!(config.use_color);
    }

    #[test]
    fn test_color_never() {
        let config = OutputConfig::from_env_and_flag("NEVER");
        assert!(!config.use_color);
    }

    #[test]
    #[serial]
    fn test_no_color_env_disables_auto() {
        env::set_var("NO_COLOR", "");
        let config = OutputConfig::from_env_and_flag("auto");
        env::remove_var("NO_COLOR");
        assert!(!config.use_color);
    }

    #[test]
    fn test_marker_with_color() {
        let config = OutputConfig::with_color();
        assert_eq!(config.marker(Marker::Sprout), "🌱");
        assert_eq!(
            config.status_line(Marker::Git, "Git is ready"),
            "🌿 Git is ready"
        );
    }

    #[test]
    fn test_marker_without_color() {
        let config = OutputConfig::without_color();
        assert_eq!(config.marker(Marker::Sprout), "[sprout]");
        assert_eq!(
            config.status_line(Marker::Warn, "No GitHub token found"),
            "[warn] No GitHub token found"
        );
    }

    #[test]
    fn test_every_marker_has_ascii_fallback() {
        let all = [
            Marker::Sprout,
            Marker::Folder,
            Marker::Template,
            Marker::Git,
            Marker::Remote,
            Marker::Warn,
            Marker::Done,
        ];
        for marker in all {
            assert!(marker.plain().is_ascii());
            assert!(marker.plain().starts_with('['));
            assert_ne!(marker.emoji(), marker.plain());
        }
    }
}
