//! # Command Dispatcher
//!
//! Entry point of the library: turns the raw argument vector into a
//! [`Command`], runs it against a [`Context`] of injected capabilities and
//! maps the result to a process exit code.
//!
//! [`run`] is the single error boundary of the program. Handlers propagate
//! every fatal error up to it; it prints `Uh-oh! <message>` plus the error
//! chain on the error channel and returns 1. Usage problems that are not
//! failures (no arguments, `--help`, an unknown command) print guidance and
//! return 0.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::commands::{self, gitprep::GitPrepOptions, new::NewOptions, web::WebOptions};
use crate::console_io::{InputSource, Output};
use crate::defaults::Settings;
use crate::error::Result;
use crate::flags;
use crate::git::CommandExecutor;
use crate::github::RemoteClient;
use crate::output::{Marker, OutputConfig};

/// Capabilities and ambient values for one invocation
pub struct Context<'a> {
    pub out: &'a mut dyn Output,
    pub input: &'a mut dyn InputSource,
    pub executor: &'a dyn CommandExecutor,
    pub remote: &'a dyn RemoteClient,
    pub settings: Settings,
    pub style: OutputConfig,
    /// Token read from `GITHUB_TOKEN`, if any
    pub env_token: Option<String>,
    /// Date stamped into generated files
    pub today: NaiveDate,
    /// Base for relative project paths
    pub cwd: PathBuf,
}

impl Context<'_> {
    /// Print a status line, prefixed with an emoji or its plain marker.
    pub fn status(&mut self, marker: Marker, text: &str) {
        let line = self.style.status_line(marker, text);
        self.out.line(&line);
    }

    /// Print a plain line.
    pub fn line(&mut self, text: &str) {
        self.out.line(text);
    }

    /// Ask the input source, trimming the answer.
    pub fn prompt(&mut self, label: &str) -> Option<String> {
        self.input.prompt(label).map(|answer| answer.trim().to_string())
    }

    /// Resolve a user-supplied path against the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        self.cwd.join(path)
    }
}

/// A parsed invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New(NewOptions),
    Web(WebOptions),
    GitPrep(GitPrepOptions),
}

impl Command {
    /// Build a command from its (already lower-cased) name and the remaining
    /// arguments. Unknown names yield `Ok(None)`.
    pub fn parse(name: &str, rest: &[String]) -> Result<Option<Self>> {
        let flags = flags::parse(rest);
        let command = match name {
            "new" => Command::New(NewOptions::from_flags(&flags)?),
            "web" => Command::Web(WebOptions::from_flags(&flags)),
            "gitprep" => Command::GitPrep(GitPrepOptions::from_flags(&flags)?),
            _ => return Ok(None),
        };
        Ok(Some(command))
    }

    fn execute(self, ctx: &mut Context) -> anyhow::Result<()> {
        match self {
            Command::New(options) => commands::new::execute(options, ctx),
            Command::Web(options) => commands::web::execute(options, ctx),
            Command::GitPrep(options) => commands::gitprep::execute(options, ctx),
        }
    }
}

fn is_help(arg: &str) -> bool {
    arg == "--help" || arg == "-h"
}

/// Whether `args` only asks for the guide: no arguments, or `--help`/`-h`
/// anywhere.
pub fn is_usage_request(args: &[String]) -> bool {
    args.is_empty() || args.iter().any(|arg| is_help(arg))
}

/// Print the greeting and the usage guide.
pub fn print_help(out: &mut dyn Output, style: &OutputConfig) {
    out.line(&style.status_line(
        Marker::Sprout,
        "Sprout is ready to plant your next project!",
    ));
    out.line(USAGE);
}

/// Run one invocation and return the process exit code.
pub fn run(args: &[String], ctx: &mut Context) -> i32 {
    if is_usage_request(args) {
        print_help(ctx.out, &ctx.style);
        return 0;
    }

    if args[0] == "--version" || args[0] == "-V" {
        ctx.line(&format!("sprout {}", env!("CARGO_PKG_VERSION")));
        return 0;
    }

    let name = args[0].to_lowercase();
    let result = Command::parse(&name, &args[1..])
        .map_err(anyhow::Error::from)
        .and_then(|command| match command {
            Some(command) => {
                log::debug!("dispatching {:?}", command);
                command.execute(ctx).map(|()| true)
            }
            None => Ok(false),
        });

    match result {
        Ok(true) => 0,
        Ok(false) => {
            ctx.line(&format!("Unknown command: {}", name));
            print_usage(ctx);
            0
        }
        Err(err) => report_failure(ctx.out, &err),
    }
}

/// Print the fatal error and its trace on the error channel.
///
/// Returns the exit code for a fatal error.
pub fn report_failure(out: &mut dyn Output, err: &anyhow::Error) -> i32 {
    out.error_line(&format!("Uh-oh! {:#}", err));
    for line in format!("{:?}", err).lines() {
        out.error_line(line);
    }
    1
}

fn print_usage(ctx: &mut Context) {
    ctx.line(USAGE);
}

const USAGE: &str = "\
Usage: sprout <command> [options]

Commands:
  new [name] [--template <id>] [--git] [--github <user> [--repo <name>] [--token <tok>] [--link]]
      Create a project folder from a template.
      Templates: java-assignment | web-basic | swift-assignment
  web [name] [--tailwind] [--bootstrap] [--git]
      Create a static web starter.
  gitprep [--path <dir>] [--no-files] [--github <user> [--repo <name>] [--token <tok>] [--link]]
      Initialize git in an existing folder and optionally push it to GitHub.

Flags:
  -n, --name <name>      Project folder name (defaults to the first bare argument)
  -t, --template <id>    Starter template for `new`
  --git                  Initialize git and make the first commit
  --github <user>        Create <user>/<repo> on GitHub and push to it
  --token <tok>          GitHub token (falls back to GITHUB_TOKEN)
  --link                 Link origin even when no token is available
  -h, --help             Show this guide

Example:
  sprout new CozyQuest --template java-assignment --git --github octocat";

/// Absolute form of `path` for messages; falls back to the path itself.
pub fn display_path(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
