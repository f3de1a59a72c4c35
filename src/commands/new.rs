//! Implementation of the `new` command.
//!
//! Creates a project folder from one of the built-in templates, optionally
//! puts it under git and pushes it to a freshly created GitHub repository.

use anyhow::Context as _;

use super::{
    create_root, init_repository, name_from_flags, origin_url, provision, ready_to_link,
    resolve_name, GithubRequest,
};
use crate::defaults::TEMPLATE_IDS;
use crate::dispatch::{display_path, Context};
use crate::error::Result;
use crate::flags::Flags;
use crate::git::GitOperator;
use crate::output::Marker;
use crate::template::{self, Template};
use crate::writer;

/// Options for `sprout new`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewOptions {
    pub name: Option<String>,
    pub template: Option<String>,
    pub tailwind: bool,
    pub bootstrap: bool,
    pub git: bool,
    pub github: Option<GithubRequest>,
}

impl NewOptions {
    pub fn from_flags(flags: &Flags) -> Result<Self> {
        Ok(Self {
            name: name_from_flags(flags),
            template: flags
                .value(&["--template", "-t"])
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
            tailwind: flags.has(&["--tailwind"]),
            bootstrap: flags.has(&["--bootstrap"]),
            git: flags.has(&["--git"]),
            github: GithubRequest::from_flags(flags)?,
        })
    }
}

/// Execute the `new` command
pub fn execute(options: NewOptions, ctx: &mut Context) -> anyhow::Result<()> {
    let name = resolve_name(options.name, ctx, "Project name")?;
    let template_id = match options.template {
        Some(id) => id,
        None => ctx
            .prompt("Template (java-assignment | web-basic | swift-assignment)")
            .unwrap_or_default(),
    };

    let root = ctx.resolve_path(&name);
    create_root(ctx, &root, &name)?;
    ctx.status(Marker::Template, &format!("Applying template: {}", template_id));

    let Some(template) = Template::from_id(&template_id, options.tailwind, options.bootstrap)
    else {
        log::debug!("unknown template '{}', nothing scaffolded", template_id);
        ctx.status(
            Marker::Warn,
            &format!("Template '{}' doesn't exist, nothing was scaffolded.", template_id),
        );
        ctx.line(&format!("Available templates: {}", TEMPLATE_IDS.join(", ")));
        return Ok(());
    };

    let set = template::render(&template, &name, ctx.today);
    writer::materialize(&root, &set, ctx.out)
        .with_context(|| format!("Failed to scaffold {}", template))?;

    if options.git || options.github.is_some() {
        init_repository(ctx, &root)?;
    }

    if let Some(request) = &options.github {
        let credentials = request.credentials(&name, ctx.env_token.clone());
        let outcome = provision(ctx, &credentials);
        if ready_to_link(ctx, &outcome, request.link) {
            let git = GitOperator::new(ctx.executor, &ctx.settings);
            git.link_and_push(&root, &origin_url(&credentials))
                .with_context(|| format!("Failed to push to {}", credentials.full_name()))?;
            ctx.status(Marker::Done, "Remote linked successfully.");
        }
    }

    ctx.status(
        Marker::Done,
        &format!("Done! Created project at: {}", display_path(&root)),
    );
    Ok(())
}
