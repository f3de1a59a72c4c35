//! CLI argument parsing and command dispatch

use std::path::PathBuf;

use clap::Parser;
use log::warn;

use sprout::console_io::{ConsoleOutput, TerminalInput};
use sprout::defaults::{Settings, API_URL_ENV, GITHUB_API_URL, LOG_ENV, TOKEN_ENV};
use sprout::dispatch::{self, Context};
use sprout::git::SystemExecutor;
use sprout::github::GithubClient;
use sprout::output::OutputConfig;

/// Sprout - plant new projects from templates and get them onto GitHub
///
/// Everything after the global options is handed to the command dispatcher:
/// `new`, `web` or `gitprep`. Run `sprout --help` for the command guide.
#[derive(Parser, Debug)]
#[command(name = "sprout")]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,

    /// Base URL of the GitHub REST API
    #[arg(long, value_name = "URL", env = API_URL_ENV, default_value = GITHUB_API_URL)]
    api_url: String,

    /// Command and its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

impl Cli {
    /// Set up logging from `--log-level`; `SPROUT_LOG` wins when set.
    fn init_logging(&self) {
        let _ = env_logger::Builder::new()
            .parse_filters(&self.log_level)
            .parse_env(LOG_ENV)
            .format_timestamp(None)
            .try_init();
    }

    /// Execute the CLI command and return the process exit code.
    ///
    /// Setup failures are reported the same way as command failures.
    pub fn execute(self) -> i32 {
        self.init_logging();

        let style = OutputConfig::from_env_and_flag(&self.color);
        let mut out = ConsoleOutput;
        if dispatch::is_usage_request(&self.args) {
            dispatch::print_help(&mut out, &style);
            return 0;
        }

        let settings = Settings::with_api_url(&self.api_url);
        let remote = match GithubClient::new(&settings.api_url) {
            Ok(remote) => remote,
            Err(e) => {
                let err = anyhow::Error::from(e).context("Failed to set up the GitHub client");
                return dispatch::report_failure(&mut out, &err);
            }
        };

        let mut input = TerminalInput;
        let mut ctx = Context {
            out: &mut out,
            input: &mut input,
            executor: &SystemExecutor,
            remote: &remote,
            settings,
            style,
            env_token: std::env::var(TOKEN_ENV).ok(),
            today: chrono::Local::now().date_naive(),
            cwd: working_dir(),
        };

        dispatch::run(&self.args, &mut ctx)
    }
}

/// The process working directory, or `.` when it cannot be read (e.g. it was
/// deleted); relative paths then resolve through the OS as usual.
fn working_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|e| {
        warn!("Failed to read the current directory, using '.': {}", e);
        PathBuf::from(".")
    })
}
