//! Jira adapter
//!
//! Implements [`IssueTracker`] over the Jira REST API v2.

use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use crate::config::JiraSettings;
use crate::core::models::{FixVersion, Issue};
use crate::core::ports::IssueTracker;
use crate::error::{GateError, Result};

/// Jira REST client
#[derive(Debug, Clone)]
pub struct JiraClient {
    http: Client,
    base_url: Url,
    user: Option<String>,
    password: Option<String>,
}

impl JiraClient {
    /// Create a client for the given Jira settings
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is missing or invalid, or the HTTP
    /// client cannot be built.
    pub fn new(settings: &JiraSettings) -> Result<Self> {
        let raw = settings
            .url
            .as_deref()
            .ok_or_else(|| GateError::config("Input required and not supplied: JIRA_URL"))?;
        let http = Client::builder().user_agent(crate::USER_AGENT).build()?;

        Ok(Self {
            http,
            base_url: base_url(raw)?,
            user: settings.user.clone(),
            password: settings.password.clone(),
        })
    }

    /// Base URL requests are made against
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl IssueTracker for JiraClient {
    async fn find_issue(&self, key: &str) -> Result<Issue> {
        let url = issue_url(&self.base_url, key)?;
        log::debug!("GET {url}");

        let mut request = self.http.get(url);
        if let Some(user) = &self.user {
            request = request.basic_auth(user, self.password.as_ref());
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(GateError::IssueNotFound(key.to_string()));
        }
        if !status.is_success() {
            return Err(GateError::Tracker {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        parse_issue(key, &body)
    }
}

/// Turn `JIRA_URL` into a base URL
///
/// A bare host is reached over https. Trailing slashes are dropped.
fn base_url(raw: &str) -> Result<Url> {
    let raw = raw.trim().trim_end_matches('/');
    let with_scheme = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };
    Url::parse(&with_scheme).map_err(|e| GateError::config(format!("Invalid JIRA_URL '{raw}': {e}")))
}

/// `{base}/rest/api/2/issue/{key}?fields=fixVersions`, with `key` as one segment
fn issue_url(base: &Url, key: &str) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| GateError::config(format!("JIRA_URL cannot be a base URL: {base}")))?
        .pop_if_empty()
        .extend(["rest", "api", "2", "issue", key]);
    url.set_query(Some("fields=fixVersions"));
    Ok(url)
}

#[derive(Debug, Deserialize)]
struct IssueResponse {
    key: Option<String>,
    #[serde(default)]
    fields: IssueFields,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueFields {
    #[serde(default)]
    fix_versions: Option<Vec<VersionResponse>>,
}

#[derive(Debug, Deserialize)]
struct VersionResponse {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    #[serde(default)]
    error_messages: Vec<String>,
}

fn parse_issue(requested_key: &str, body: &str) -> Result<Issue> {
    let response: IssueResponse = serde_json::from_str(body)?;
    let fix_versions = response
        .fields
        .fix_versions
        .unwrap_or_default()
        .into_iter()
        .map(|v| FixVersion::new(v.name))
        .collect();

    Ok(Issue::new(
        response.key.unwrap_or_else(|| requested_key.to_string()),
        fix_versions,
    ))
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.error_messages.into_iter().next())
        .unwrap_or_else(|| body.trim().to_string())
}
