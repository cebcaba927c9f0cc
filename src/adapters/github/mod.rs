//! GitHub adapter
//!
//! Implements [`PullRequestPlatform`] for a GitHub Actions run.
//!
//! - [`event`] - Pull request refs from the workflow event payload
//! - [`GitHubPullRequest`] - Comment posting over the REST API

pub mod event;

use std::path::PathBuf;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Url};
use serde::Serialize;

use crate::core::models::PullRequestRefs;
use crate::core::ports::PullRequestPlatform;
use crate::error::{GateError, Result};

pub use event::{load_event, parse_event};

/// Default REST API root
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Where the current workflow run comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitHubContext {
    /// Path to the event payload (`GITHUB_EVENT_PATH`)
    pub event_path: Option<PathBuf>,
    /// `owner/repo` (`GITHUB_REPOSITORY`)
    pub repository: Option<String>,
    /// REST API root (`GITHUB_API_URL`)
    pub api_url: Option<String>,
}

impl GitHubContext {
    /// Read the context from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            event_path: var("GITHUB_EVENT_PATH").map(PathBuf::from),
            repository: var("GITHUB_REPOSITORY"),
            api_url: var("GITHUB_API_URL"),
        }
    }

    /// Pull request refs for this run
    ///
    /// No event path means this is not an Actions run, which is treated
    /// like a run without a pull request.
    ///
    /// # Errors
    ///
    /// Returns an error if the event file exists but cannot be read or parsed.
    pub fn pull_request(&self) -> Result<PullRequestRefs> {
        self.event_path
            .as_deref()
            .map_or_else(|| Ok(PullRequestRefs::default()), load_event)
    }
}

/// The pull request of the current run
#[derive(Debug, Clone)]
pub struct GitHubPullRequest {
    http: Client,
    token: String,
    api_url: String,
    repository: Option<String>,
    refs: PullRequestRefs,
}

#[derive(Debug, Serialize)]
struct CommentRequest<'a> {
    body: &'a str,
}

impl GitHubPullRequest {
    /// Create the adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(token: impl Into<String>, context: &GitHubContext, refs: PullRequestRefs) -> Result<Self> {
        let http = Client::builder().user_agent(crate::USER_AGENT).build()?;
        Ok(Self {
            http,
            token: token.into(),
            api_url: context
                .api_url
                .clone()
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            repository: context.repository.clone(),
            refs,
        })
    }

    fn comments_url(&self, number: u64) -> Result<Url> {
        let repository = self
            .repository
            .as_deref()
            .ok_or_else(|| GateError::config("GITHUB_REPOSITORY is not set"))?;
        comments_url(&self.api_url, repository, number)
    }
}

impl PullRequestPlatform for GitHubPullRequest {
    fn pull_request(&self) -> &PullRequestRefs {
        &self.refs
    }

    async fn post_comment(&self, body: &str) -> Result<()> {
        let number = self.refs.number.ok_or(GateError::NotPullRequest)?;
        let url = self.comments_url(number)?;
        log::debug!("POST {url}");

        let response = self
            .http
            .post(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/vnd.github+json")
            .json(&CommentRequest { body })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GateError::Platform {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }
}

/// `{api}/repos/{owner}/{repo}/issues/{number}/comments`
fn comments_url(api_url: &str, repository: &str, number: u64) -> Result<Url> {
    let (owner, repo) = repository
        .split_once('/')
        .filter(|(owner, repo)| !owner.is_empty() && !repo.is_empty())
        .ok_or_else(|| GateError::config(format!("Invalid GITHUB_REPOSITORY '{repository}'")))?;

    let number = number.to_string();
    let mut url = Url::parse(api_url.trim_end_matches('/'))
        .map_err(|e| GateError::config(format!("Invalid GITHUB_API_URL '{api_url}': {e}")))?;
    url.path_segments_mut()
        .map_err(|()| GateError::config(format!("GITHUB_API_URL cannot be a base URL: {api_url}")))?
        .pop_if_empty()
        .extend(["repos", owner, repo, "issues", number.as_str(), "comments"]);
    Ok(url)
}
