//! Default values for sprout.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication. Values that users may want
//! to change are carried by [`Settings`], which the binary fills in from CLI
//! flags and environment variables.

/// Environment variable holding the fallback GitHub token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the GitHub API base URL.
pub const API_URL_ENV: &str = "SPROUT_GITHUB_API";

/// Environment variable holding the `env_logger` filter.
pub const LOG_ENV: &str = "SPROUT_LOG";

/// Public GitHub REST API.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Host used to build the `origin` remote URL.
pub const GITHUB_WEB_URL: &str = "https://github.com";

/// Branch every sprouted repository is renamed to before pushing.
pub const DEFAULT_BRANCH: &str = "main";

/// Message of the initial commit.
pub const COMMIT_MESSAGE: &str = "chore: initialize project with sprout";

/// Name of the primary remote.
pub const REMOTE_NAME: &str = "origin";

/// Template identifiers accepted by `new --template`.
pub const TEMPLATE_IDS: [&str; 3] = ["java-assignment", "web-basic", "swift-assignment"];

/// Effective settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the GitHub REST API.
    pub api_url: String,
    /// Branch pushed to `origin`.
    pub default_branch: String,
    /// Message used for the initial commit.
    pub commit_message: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: GITHUB_API_URL.to_string(),
            default_branch: DEFAULT_BRANCH.to_string(),
            commit_message: COMMIT_MESSAGE.to_string(),
        }
    }
}

impl Settings {
    /// Settings with a custom API base URL, e.g. a GitHub Enterprise host.
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }
}

/// HTTPS clone URL of `owner/repo` on GitHub.
pub fn remote_url(owner: &str, repo: &str) -> String {
    format!("{}/{}/{}.git", GITHUB_WEB_URL, owner, repo)
}
