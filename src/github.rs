//! # Remote Repo Provisioner
//!
//! Creates the GitHub repository a sprouted project is pushed to.
//!
//! The HTTP call sits behind [`RemoteClient`] so the provisioning outcomes can
//! be exercised without network access. [`create_remote_repo`] never fails:
//! every answer, including transport errors, is folded into a
//! [`ProvisionOutcome`] and the command carries on with its local state.
//!
//! | Response | Outcome |
//! |---|---|
//! | no token | `Skipped` (no request is sent) |
//! | 2xx | `Created` |
//! | 422 | `AlreadyExists` |
//! | other status | `Failed { status, body }` |
//! | transport error | `Unreachable { message }` |

use std::fmt;
use std::time::Duration;

use log::{info, warn};
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Serialize;
use url::Url;

use crate::error::{Error, Result};

/// Status GitHub answers with when the repository name is taken.
const UNPROCESSABLE_ENTITY: u16 = 422;

/// Body of `POST /user/repos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRepoRequest {
    pub name: String,
    pub private: bool,
    pub auto_init: bool,
}

impl CreateRepoRequest {
    /// A public, empty repository.
    pub fn public(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            private: false,
            auto_init: false,
        }
    }
}

/// Creates repositories on the forge - allows mocking in tests
pub trait RemoteClient {
    /// Send one creation request.
    ///
    /// Non-2xx answers come back as [`Error::Api`], transport failures as
    /// [`Error::Network`].
    fn create_repo(&self, request: &CreateRepoRequest, token: &str) -> Result<()>;
}

/// [`RemoteClient`] talking to the GitHub REST API
pub struct GithubClient {
    api_url: String,
    http: HttpClient,
}

impl GithubClient {
    /// Create a client for the API rooted at `api_url`.
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        let api_url = api_url.into();
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Network {
                url: api_url.clone(),
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { api_url, http })
    }

    /// `<api_url>/user/repos`, keeping any path prefix of the base URL.
    pub fn endpoint(&self) -> Result<Url> {
        let base = if self.api_url.ends_with('/') {
            Url::parse(&self.api_url)?
        } else {
            Url::parse(&format!("{}/", self.api_url))?
        };
        Ok(base.join("user/repos")?)
    }
}

impl RemoteClient for GithubClient {
    fn create_repo(&self, request: &CreateRepoRequest, token: &str) -> Result<()> {
        let url = self.endpoint()?;
        let response = self
            .http
            .post(url.clone())
            .header(AUTHORIZATION, format!("token {}", token))
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, concat!("sprout/", env!("CARGO_PKG_VERSION")))
            .json(request)
            .send()
            .map_err(|e| Error::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().unwrap_or_default();
        Err(Error::Api {
            status: status.as_u16(),
            body,
        })
    }
}

/// Human-readable part of an error body.
///
/// GitHub error bodies look like `{"message": "...", ...}`; this returns the
/// message when there is one and the trimmed raw body otherwise.
pub fn api_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

/// Who owns the remote repository and how to authenticate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubCredentials {
    pub owner: String,
    pub repo_name: String,
    pub token: Option<String>,
}

impl GithubCredentials {
    /// Pick the token: explicit flag first, then the environment. Blank
    /// tokens count as missing.
    pub fn resolve(
        owner: impl Into<String>,
        repo_name: impl Into<String>,
        flag_token: Option<String>,
        env_token: Option<String>,
    ) -> Self {
        let token = [flag_token, env_token]
            .into_iter()
            .flatten()
            .map(|t| t.trim().to_string())
            .find(|t| !t.is_empty());

        Self {
            owner: owner.into(),
            repo_name: repo_name.into(),
            token,
        }
    }

    /// `owner/repo`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo_name)
    }
}

/// What happened when asking the forge for a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Created,
    AlreadyExists,
    /// No token was available, nothing was sent.
    Skipped,
    Failed { status: u16, body: String },
    Unreachable { message: String },
}

impl ProvisionOutcome {
    /// Whether `origin` should be linked after this outcome.
    ///
    /// Failures still link: the repository may exist anyway. A skipped
    /// request links only when the caller asked for it.
    pub fn should_link(&self, link_requested: bool) -> bool {
        match self {
            ProvisionOutcome::Skipped => link_requested,
            _ => true,
        }
    }
}

impl fmt::Display for ProvisionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProvisionOutcome::Created => f.write_str("created"),
            ProvisionOutcome::AlreadyExists => f.write_str("already exists"),
            ProvisionOutcome::Skipped => f.write_str("skipped (no token)"),
            ProvisionOutcome::Failed { status, .. } => write!(f, "failed ({})", status),
            ProvisionOutcome::Unreachable { .. } => f.write_str("unreachable"),
        }
    }
}

/// Ask the forge to create `credentials.repo_name`. Sends at most one
/// request and never returns an error.
pub fn create_remote_repo(
    client: &dyn RemoteClient,
    credentials: &GithubCredentials,
) -> ProvisionOutcome {
    let Some(token) = credentials.token.as_deref() else {
        info!(
            "No GitHub token available, skipping creation of {}",
            credentials.full_name()
        );
        return ProvisionOutcome::Skipped;
    };

    info!("Creating GitHub repository {}", credentials.full_name());
    let request = CreateRepoRequest::public(&credentials.repo_name);

    match client.create_repo(&request, token) {
        Ok(()) => ProvisionOutcome::Created,
        Err(Error::Api { status, .. }) if status == UNPROCESSABLE_ENTITY => {
            info!("{} already exists on GitHub", credentials.full_name());
            ProvisionOutcome::AlreadyExists
        }
        Err(Error::Api { status, body }) => {
            warn!("GitHub API response ({}): {}", status, body);
            ProvisionOutcome::Failed { status, body }
        }
        Err(e) => {
            warn!("Could not reach GitHub: {}", e);
            ProvisionOutcome::Unreachable {
                message: e.to_string(),
            }
        }
    }
}
