//! Test doubles for the injected capabilities.
//!
//! - [`RecordingOutput`] keeps every line written to either channel.
//! - [`ScriptedInput`] answers prompts from a queue.
//! - [`RecordingExecutor`] records commands and behaves like a tiny `git`:
//!   `git init` creates `.git`, `git remote add/remove origin` toggle the
//!   remote, and `git diff --cached --quiet` reports staged changes.
//! - [`MockRemoteClient`] answers creation requests with a fixed status.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};

use crate::console_io::{InputSource, Output};
use crate::error::{Error, Result};
use crate::git::CommandExecutor;
use crate::github::{CreateRepoRequest, RemoteClient};

#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub lines: Vec<String>,
    pub errors: Vec<String>,
}

impl RecordingOutput {
    /// Standard lines joined with newlines
    pub fn stdout(&self) -> String {
        self.lines.join("\n")
    }

    /// Error lines joined with newlines
    pub fn stderr(&self) -> String {
        self.errors.join("\n")
    }
}

impl Output for RecordingOutput {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn error_line(&mut self, text: &str) {
        self.errors.push(text.to_string());
    }
}

#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl ScriptedInput {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: Vec::new(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn prompt(&mut self, label: &str) -> Option<String> {
        self.asked.push(label.to_string());
        self.answers.pop_front()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Run,
    Probe,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub dir: PathBuf,
    pub argv: Vec<String>,
    pub kind: CallKind,
}

#[derive(Debug, Default)]
pub struct RecordingExecutor {
    calls: RefCell<Vec<Call>>,
    exit_codes: HashMap<String, i32>,
    spawn_failures: HashSet<String>,
    origin: RefCell<bool>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the exit code of one command line.
    pub fn with_exit_code(mut self, command: &str, code: i32) -> Self {
        self.exit_codes.insert(command.to_string(), code);
        self
    }

    /// Make one command line fail to start.
    pub fn with_spawn_failure(mut self, command: &str) -> Self {
        self.spawn_failures.insert(command.to_string());
        self
    }

    /// Start with an `origin` remote configured.
    pub fn with_origin(self) -> Self {
        *self.origin.borrow_mut() = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Recorded command lines, space-joined
    pub fn commands(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|call| call.argv.join(" "))
            .collect()
    }

    fn default_code(&self, dir: &Path, argv: &[&str]) -> i32 {
        match argv {
            ["git", "init"] => {
                let _ = fs::create_dir_all(dir.join(".git"));
                0
            }
            ["git", "remote", "get-url", "origin"] => {
                if *self.origin.borrow() {
                    0
                } else {
                    2
                }
            }
            // Exit 1 means "there are staged changes".
            ["git", "diff", "--cached", "--quiet"] => 1,
            _ => 0,
        }
    }

    fn execute(&self, dir: &Path, argv: &[&str], kind: CallKind) -> Result<i32> {
        let command = argv.join(" ");
        self.calls.borrow_mut().push(Call {
            dir: dir.to_path_buf(),
            argv: argv.iter().map(|a| a.to_string()).collect(),
            kind,
        });

        if self.spawn_failures.contains(&command) {
            return Err(Error::GitCommand {
                command,
                message: "failed to start".to_string(),
            });
        }

        let code = match self.exit_codes.get(&command) {
            Some(code) => *code,
            None => self.default_code(dir, argv),
        };

        if code == 0 {
            match argv {
                ["git", "remote", "add", "origin", _] => *self.origin.borrow_mut() = true,
                ["git", "remote", "remove", "origin"] => *self.origin.borrow_mut() = false,
                _ => {}
            }
        }
        Ok(code)
    }
}

impl CommandExecutor for RecordingExecutor {
    fn run(&self, dir: &Path, argv: &[&str]) -> Result<i32> {
        self.execute(dir, argv, CallKind::Run)
    }

    fn probe(&self, dir: &Path, argv: &[&str]) -> Result<i32> {
        self.execute(dir, argv, CallKind::Probe)
    }
}

#[derive(Debug)]
enum MockResponse {
    Status(u16),
    Body(u16, String),
    Unreachable(String),
}

#[derive(Debug)]
pub struct MockRemoteClient {
    response: MockResponse,
    requests: RefCell<Vec<(CreateRepoRequest, String)>>,
}

impl MockRemoteClient {
    /// Answer every request with `status`; non-2xx bodies read `status <n>`.
    pub fn with_status(status: u16) -> Self {
        Self {
            response: MockResponse::Status(status),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Answer every request with `status` and a fixed body.
    pub fn with_body(status: u16, body: &str) -> Self {
        Self {
            response: MockResponse::Body(status, body.to_string()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Fail every request with a transport error.
    pub fn unreachable(message: &str) -> Self {
        Self {
            response: MockResponse::Unreachable(message.to_string()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Requests received so far, with the token used
    pub fn requests(&self) -> Vec<(CreateRepoRequest, String)> {
        self.requests.borrow().clone()
    }
}

impl RemoteClient for MockRemoteClient {
    fn create_repo(&self, request: &CreateRepoRequest, token: &str) -> Result<()> {
        self.requests
            .borrow_mut()
            .push((request.clone(), token.to_string()));

        match &self.response {
            MockResponse::Status(status) if (200..300).contains(status) => Ok(()),
            MockResponse::Status(status) => Err(Error::Api {
                status: *status,
                body: format!("status {}", status),
            }),
            MockResponse::Body(status, _) if (200..300).contains(status) => Ok(()),
            MockResponse::Body(status, body) => Err(Error::Api {
                status: *status,
                body: body.clone(),
            }),
            MockResponse::Unreachable(message) => Err(Error::Network {
                url: "https://api.github.com/user/repos".to_string(),
                message: message.clone(),
            }),
        }
    }
}
