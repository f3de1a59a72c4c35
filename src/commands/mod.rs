//! # Command Implementations
//!
//! One module per `sprout` command. Each module contains:
//! - An `Options` struct built from the parsed [`Flags`].
//! - An `execute` function that takes the options and a
//!   [`Context`] and performs the command's logic.
//!
//! The helpers below hold the steps shared by more than one command: name
//! resolution, the first commit, and the GitHub provisioning flow.

pub mod gitprep;
pub mod new;
pub mod web;

use std::path::Path;

use anyhow::Context as _;

use crate::defaults::remote_url;
use crate::dispatch::Context;
use crate::error::{Error, Result};
use crate::flags::Flags;
use crate::git::{CommitStatus, GitOperator};
use crate::github::{api_message, create_remote_repo, GithubCredentials, ProvisionOutcome};
use crate::output::Marker;


/// `--github <user>` and the flags that travel with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubRequest {
    pub owner: String,
    pub repo: Option<String>,
    pub token: Option<String>,
    /// Link `origin` even when provisioning was skipped
    pub link: bool,
}

impl GithubRequest {
    /// `None` when `--github` is absent. A valueless `--github`, `--repo` or
    /// `--token` is a user error.
    pub fn from_flags(flags: &Flags) -> Result<Option<Self>> {
        let Some(owner) = flags.required_value(&["--github"], "username")? else {
            return Ok(None);
        };
        Ok(Some(Self {
            owner,
            repo: flags.required_value(&["--repo"], "name")?,
            token: flags.required_value(&["--token"], "token")?,
            link: flags.has(&["--link"]),
        }))
    }

    /// Credentials for this request; `default_repo` fills a missing `--repo`.
    pub fn credentials(&self, default_repo: &str, env_token: Option<String>) -> GithubCredentials {
        let repo = self
            .repo
            .clone()
            .unwrap_or_else(|| default_repo.to_string());
        GithubCredentials::resolve(&self.owner, repo, self.token.clone(), env_token)
    }
}

/// Name from `--name`/`-n`, else the first bare argument.
pub(crate) fn name_from_flags(flags: &Flags) -> Option<String> {
    flags
        .value(&["--name", "-n"])
        .or_else(|| flags.positional().map(str::to_string))
}

/// Use `given` or ask for it; a blank answer is an error.
pub(crate) fn resolve_name(given: Option<String>, ctx: &mut Context, label: &str) -> Result<String> {
    let name = match given {
        Some(name) => name.trim().to_string(),
        None => ctx.prompt(label).unwrap_or_default(),
    };
    if name.is_empty() {
        return Err(Error::UserInput {
            message: "Project name cannot be empty".to_string(),
            hint: Some("Pass --name <name> or a bare name after the command".to_string()),
        });
    }
    Ok(name)
}

/// Create the project folder, announcing it first.
pub(crate) fn create_root(ctx: &mut Context, root: &Path, name: &str) -> anyhow::Result<()> {
    ctx.status(Marker::Folder, &format!("Creating folder: {}", name));
    std::fs::create_dir_all(root).map_err(|e| Error::Filesystem {
        path: root.display().to_string(),
        message: format!("Failed to create directory: {}", e),
    })?;
    Ok(())
}

/// `git init` when needed, then the first commit.
pub(crate) fn init_repository(ctx: &mut Context, root: &Path) -> anyhow::Result<()> {
    let git = GitOperator::new(ctx.executor, &ctx.settings);
    let status = git
        .ensure_initialized(root)
        .with_context(|| format!("Failed to prepare git in {}", root.display()))?;

    match status {
        CommitStatus::Committed => ctx.status(Marker::Git, "Git initialized and first commit made."),
        CommitStatus::NothingToCommit => ctx.status(Marker::Git, "Git is set up; nothing new to commit."),
    }
    Ok(())
}

/// Ask the forge for the repository and tell the user what happened.
pub(crate) fn provision(ctx: &mut Context, credentials: &GithubCredentials) -> ProvisionOutcome {
    let outcome = create_remote_repo(ctx.remote, credentials);
    log::debug!("provisioning {}: {}", credentials.full_name(), outcome);
    match &outcome {
        ProvisionOutcome::Created => {
            ctx.status(Marker::Remote, &format!("Created GitHub repo: {}", credentials.full_name()))
        }
        ProvisionOutcome::AlreadyExists => ctx.status(
            Marker::Remote,
            "Repo likely already exists on GitHub; proceeding to add remote.",
        ),
        ProvisionOutcome::Skipped => {
            ctx.status(
                Marker::Warn,
                "No GitHub token found. Set env var GITHUB_TOKEN or pass --token <VALUE>.",
            );
            ctx.line("Skipping remote repo creation; local git is still set up.");
        }
        ProvisionOutcome::Failed { status, body } => {
            ctx.status(
                Marker::Warn,
                &format!("GitHub API response ({}): {}", status, api_message(body)),
            );
            ctx.line("You can still add the remote manually later.");
        }
        ProvisionOutcome::Unreachable { message } => {
            ctx.status(Marker::Warn, &format!("Could not reach GitHub: {}", message));
            ctx.line("You can still add the remote manually later.");
        }
    }
    outcome
}

/// Whether to go on to linking after `outcome`; prints a note when not.
pub(crate) fn ready_to_link(ctx: &mut Context, outcome: &ProvisionOutcome, link: bool) -> bool {
    if outcome.should_link(link) {
        return true;
    }
    ctx.line("Remote not linked. Provide a token, or pass --link to link origin anyway.");
    false
}

/// Remote URL for the credentials' repository.
pub(crate) fn origin_url(credentials: &GithubCredentials) -> String {
    remote_url(&credentials.owner, &credentials.repo_name)
}
