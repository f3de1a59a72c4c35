//! # Git Operator
//!
//! Drives the system `git` binary to turn a scaffolded directory into a
//! committed repository and to link it to GitHub.
//!
//! All commands go through a [`CommandExecutor`], so the sequencing below can
//! be tested without a real `git`. The production executor runs each command
//! synchronously in the project root with inherited stdio, which lets the
//! user see git's own output.
//!
//! ## Sequencing
//!
//! - `ensure_initialized`: `git init` (only without `.git`), `git add .`,
//!   then the commit step.
//! - `set_origin`: remove an existing `origin` (best-effort), `git remote add
//!   origin <url>`, `git branch -M main`.
//! - `push_current_branch`: `git push -u origin main`.
//!
//! ## Empty commits
//!
//! After staging, `git diff --cached --quiet` tells whether anything is
//! staged. When nothing is, the commit is skipped and reported as
//! [`CommitStatus::NothingToCommit`] instead of letting `git commit` fail.
//! Re-running a command against an unchanged tree is therefore never fatal.

use std::path::Path;
use std::process::{Command, Stdio};

use log::{debug, info};

use crate::defaults::{Settings, REMOTE_NAME};
use crate::error::{Error, Result};

/// Runs external commands in a directory - allows mocking in tests
pub trait CommandExecutor {
    /// Run `argv` in `dir` with inherited stdio and return its exit code.
    fn run(&self, dir: &Path, argv: &[&str]) -> Result<i32>;

    /// Run `argv` in `dir` with all output discarded and return its exit code.
    fn probe(&self, dir: &Path, argv: &[&str]) -> Result<i32>;
}

/// The default implementation of `CommandExecutor`, which spawns real
/// processes.
#[derive(Debug, Default)]
pub struct SystemExecutor;

impl SystemExecutor {
    fn command(dir: &Path, argv: &[&str]) -> Result<Command> {
        let (program, args) = argv.split_first().ok_or_else(|| Error::GitCommand {
            command: String::new(),
            message: "empty command line".to_string(),
        })?;
        let mut cmd = Command::new(program);
        cmd.args(args).current_dir(dir);
        Ok(cmd)
    }

    fn spawn_error(argv: &[&str], e: std::io::Error) -> Error {
        let message = if e.kind() == std::io::ErrorKind::NotFound {
            format!("{} is not installed or not on PATH", argv[0])
        } else {
            e.to_string()
        };
        Error::GitCommand {
            command: argv.join(" "),
            message,
        }
    }
}

impl CommandExecutor for SystemExecutor {
    fn run(&self, dir: &Path, argv: &[&str]) -> Result<i32> {
        let status = Self::command(dir, argv)?
            .status()
            .map_err(|e| Self::spawn_error(argv, e))?;
        Ok(status.code().unwrap_or(-1))
    }

    fn probe(&self, dir: &Path, argv: &[&str]) -> Result<i32> {
        let status = Self::command(dir, argv)?
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| Self::spawn_error(argv, e))?;
        Ok(status.code().unwrap_or(-1))
    }
}

/// Result of the commit step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitStatus {
    Committed,
    NothingToCommit,
}

/// Repository facts, queried fresh every time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepoState {
    pub has_local_git_dir: bool,
    pub has_origin_remote: bool,
}

/// Sequences git commands for one project root
pub struct GitOperator<'a> {
    executor: &'a dyn CommandExecutor,
    settings: &'a Settings,
}

impl<'a> GitOperator<'a> {
    pub fn new(executor: &'a dyn CommandExecutor, settings: &'a Settings) -> Self {
        Self { executor, settings }
    }

    /// Run a command that must succeed.
    fn run_checked(&self, root: &Path, argv: &[&str]) -> Result<()> {
        let code = self.executor.run(root, argv)?;
        if code != 0 {
            return Err(Error::GitCommand {
                command: argv.join(" "),
                message: format!("exited with status {}", code),
            });
        }
        Ok(())
    }

    /// Whether `root` holds a `.git` control directory.
    pub fn has_git_dir(&self, root: &Path) -> bool {
        root.join(".git").exists()
    }

    /// Current repository facts for `root`.
    pub fn state(&self, root: &Path) -> RepoState {
        RepoState {
            has_local_git_dir: self.has_git_dir(root),
            has_origin_remote: self.has_origin(root),
        }
    }

    /// Initialize the repository if needed, then stage and commit everything.
    pub fn ensure_initialized(&self, root: &Path) -> Result<CommitStatus> {
        if self.has_git_dir(root) {
            debug!("git repository already present in {}", root.display());
        } else {
            info!("Initializing git repository in {}", root.display());
            self.run_checked(root, &["git", "init"])?;
        }
        let message = self.settings.commit_message.clone();
        self.commit_all(root, &message)
    }

    /// Stage everything and commit it with `message`.
    pub fn commit_all(&self, root: &Path, message: &str) -> Result<CommitStatus> {
        info!("Staging all files in {}", root.display());
        self.run_checked(root, &["git", "add", "."])?;

        let staged = self
            .executor
            .probe(root, &["git", "diff", "--cached", "--quiet"])?;
        if staged == 0 {
            info!("Nothing new to commit in {}", root.display());
            return Ok(CommitStatus::NothingToCommit);
        }

        info!("Committing: {}", message);
        self.run_checked(root, &["git", "commit", "-m", message])?;
        Ok(CommitStatus::Committed)
    }

    /// Whether a remote named `origin` is configured. A failure to ask counts
    /// as "no".
    pub fn has_origin(&self, root: &Path) -> bool {
        match self
            .executor
            .probe(root, &["git", "remote", "get-url", REMOTE_NAME])
        {
            Ok(code) => code == 0,
            Err(e) => {
                debug!("could not query remote '{}': {}", REMOTE_NAME, e);
                false
            }
        }
    }

    /// Remove `origin`. Best-effort: any failure is ignored.
    pub fn remove_origin(&self, root: &Path) {
        info!("Removing remote '{}'", REMOTE_NAME);
        match self
            .executor
            .run(root, &["git", "remote", "remove", REMOTE_NAME])
        {
            Ok(0) => {}
            Ok(code) => debug!("git remote remove exited with {}, ignored", code),
            Err(e) => debug!("git remote remove failed, ignored: {}", e),
        }
    }

    /// Point `origin` at `url` and rename the current branch to the default
    /// branch.
    pub fn set_origin(&self, root: &Path, url: &str) -> Result<()> {
        if self.has_origin(root) {
            self.remove_origin(root);
        } else {
            info!("No existing '{}' remote found, skipping removal", REMOTE_NAME);
        }

        info!("Adding remote '{}': {}", REMOTE_NAME, url);
        self.run_checked(root, &["git", "remote", "add", REMOTE_NAME, url])?;

        let branch = self.settings.default_branch.as_str();
        info!("Renaming current branch to '{}'", branch);
        self.run_checked(root, &["git", "branch", "-M", branch])
    }

    /// Push the default branch to `origin` and set upstream tracking.
    pub fn push_current_branch(&self, root: &Path) -> Result<()> {
        let branch = self.settings.default_branch.as_str();
        info!("Pushing '{}' to '{}'", branch, REMOTE_NAME);
        self.run_checked(root, &["git", "push", "-u", REMOTE_NAME, branch])
    }

    /// `set_origin` followed by `push_current_branch`.
    pub fn link_and_push(&self, root: &Path, url: &str) -> Result<()> {
        self.set_origin(root, url)?;
        self.push_current_branch(root)
    }
}
