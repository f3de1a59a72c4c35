//! Implementation of the `web` command.

use anyhow::Context as _;

use super::{create_root, init_repository, name_from_flags, resolve_name};
use crate::dispatch::{display_path, Context};
use crate::flags::Flags;
use crate::output::Marker;
use crate::template::{self, Template};
use crate::writer;

/// Options for `sprout web`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WebOptions {
    pub name: Option<String>,
    pub tailwind: bool,
    pub bootstrap: bool,
    pub git: bool,
}

impl WebOptions {
    pub fn from_flags(flags: &Flags) -> Self {
        Self {
            name: name_from_flags(flags),
            tailwind: flags.has(&["--tailwind"]),
            bootstrap: flags.has(&["--bootstrap"]),
            git: flags.has(&["--git"]),
        }
    }

    fn template(&self) -> Template {
        Template::WebBasic {
            tailwind: self.tailwind,
            bootstrap: self.bootstrap,
        }
    }
}

/// Execute the `web` command
pub fn execute(options: WebOptions, ctx: &mut Context) -> anyhow::Result<()> {
    let template = options.template();
    let name = resolve_name(options.name, ctx, "Site folder name")?;

    let root = ctx.resolve_path(&name);
    create_root(ctx, &root, &name)?;
    ctx.status(Marker::Template, &format!("Applying template: {}", template));

    let set = template::render(&template, &name, ctx.today);
    writer::materialize(&root, &set, ctx.out)
        .with_context(|| format!("Failed to scaffold {}", template))?;

    if options.git {
        init_repository(ctx, &root)?;
    }

    ctx.status(
        Marker::Done,
        &format!("Web project ready at: {}", display_path(&root)),
    );
    Ok(())
}
