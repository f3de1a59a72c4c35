//! Shared test utilities for the E2E tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new();
//!     fixture.command().arg("web").arg("Site").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::git_available;
    pub use super::TestFixture;
}

/// API base nothing listens on, so a stray request fails fast.
pub const DEAD_API_URL: &str = "http://127.0.0.1:9";

/// Check whether a real `git` binary is on PATH.
///
/// Tests that run `git` call this first and return early when it is missing.
#[allow(dead_code)]
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// A temporary working directory for one `sprout` invocation.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a file with the given path and content.
    #[allow(dead_code)]
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command running in this fixture's directory.
    ///
    /// The command never sees a real token or the real API, never prompts a
    /// terminal, and commits under a fixed identity.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("sprout");
        cmd.current_dir(self.path())
            .env_remove("GITHUB_TOKEN")
            .env_remove("SPROUT_LOG")
            .env("SPROUT_GITHUB_API", DEAD_API_URL)
            .env("NO_COLOR", "1")
            .env("GIT_AUTHOR_NAME", "Sprout Test")
            .env("GIT_AUTHOR_EMAIL", "sprout@example.com")
            .env("GIT_COMMITTER_NAME", "Sprout Test")
            .env("GIT_COMMITTER_EMAIL", "sprout@example.com")
            .write_stdin("");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_file() {
        let fixture = TestFixture::new().with_file("notes/todo.txt", "hello");
        assert!(fixture.path().join("notes/todo.txt").exists());
    }
}
