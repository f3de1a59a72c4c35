//! Implementation of the `gitprep` command.
//!
//! Prepares an existing directory for git: adds a starter `README.md` and
//! `.gitignore` when they are missing, makes the first commit, and optionally
//! links and pushes a GitHub repository.

use std::path::Path;

use anyhow::Context as _;

use super::{init_repository, origin_url, provision, ready_to_link, GithubRequest};
use crate::dispatch::{display_path, Context};
use crate::error::{Error, Result};
use crate::flags::Flags;
use crate::git::GitOperator;
use crate::output::Marker;
use crate::template;
use crate::writer;

/// Options for `sprout gitprep`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitPrepOptions {
    pub path: String,
    pub no_files: bool,
    pub github: Option<GithubRequest>,
}

impl Default for GitPrepOptions {
    fn default() -> Self {
        Self {
            path: ".".to_string(),
            no_files: false,
            github: None,
        }
    }
}

impl GitPrepOptions {
    pub fn from_flags(flags: &Flags) -> Result<Self> {
        Ok(Self {
            path: flags
                .required_value(&["--path"], "dir")?
                .unwrap_or_else(|| ".".to_string()),
            no_files: flags.has(&["--no-files"]),
            github: GithubRequest::from_flags(flags)?,
        })
    }
}

/// Final component of `root` after resolving `.` and `..`.
fn directory_name(root: &Path) -> String {
    root.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "project".to_string())
}

/// Execute the `gitprep` command
pub fn execute(options: GitPrepOptions, ctx: &mut Context) -> anyhow::Result<()> {
    let root = ctx.resolve_path(&options.path);
    if !root.is_dir() {
        return Err(Error::UserInput {
            message: format!("Path does not exist: {}", display_path(&root)),
            hint: Some("Pass an existing directory with --path <dir>".to_string()),
        }
        .into());
    }
    let dir_name = directory_name(&root);

    if options.no_files {
        log::debug!("--no-files given, leaving {} untouched", root.display());
    } else {
        let set = template::render_gitprep(&dir_name, ctx.today);
        writer::materialize(&root, &set, ctx.out)
            .context("Failed to write starter files")?;
    }

    init_repository(ctx, &root)?;

    if let Some(request) = &options.github {
        let credentials = request.credentials(&dir_name, ctx.env_token.clone());
        let outcome = provision(ctx, &credentials);

        if ready_to_link(ctx, &outcome, request.link) {
            let git = GitOperator::new(ctx.executor, &ctx.settings);
            git.set_origin(&root, &origin_url(&credentials))
                .context("Failed to link origin")?;

            if git.has_origin(&root) {
                git.push_current_branch(&root)
                    .with_context(|| format!("Failed to push to {}", credentials.full_name()))?;
                ctx.status(Marker::Done, "Remote linked successfully.");
            } else {
                ctx.status(Marker::Warn, "Skipping push: no remote named 'origin' was found.");
            }
        }
    }

    ctx.status(Marker::Git, &format!("Git is ready in: {}", display_path(&root)));
    Ok(())
}
