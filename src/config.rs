//! Input configuration
//!
//! Inputs follow the GitHub Actions convention: an input named
//! `JIRA_URL` is read from `INPUT_JIRA_URL`, then from `JIRA_URL`.
//! Values are trimmed and an empty value counts as unset.

use crate::error::{GateError, Result};

/// Input names recognised by the gate
pub mod names {
    /// Token used to comment on the pull request
    pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";
    /// Jira host or base URL
    pub const JIRA_URL: &str = "JIRA_URL";
    /// Jira username
    pub const JIRA_USER: &str = "JIRA_USER";
    /// Jira password or API token
    pub const JIRA_PASSWORD: &str = "JIRA_PASSWORD";
    /// Pattern extracting the issue key from the source branch
    pub const JIRA_ISSUE_REGEX: &str = "JIRA_ISSUE_REGEX";
    /// Comment posted when the issue has no fix version
    pub const NOT_FOUND_MESSAGE: &str = "NOT_FOUND_MESSAGE";
}

/// Jira connection settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JiraSettings {
    /// Host (`acme.atlassian.net`) or base URL (`https://jira.acme.io/jira`)
    pub url: Option<String>,
    /// Username for basic auth
    pub user: Option<String>,
    /// Password or API token for basic auth
    pub password: Option<String>,
}

/// All gate inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    /// GitHub token, required by the `check` command
    pub github_token: Option<String>,
    /// Jira connection
    pub jira: JiraSettings,
    /// Issue key pattern
    pub issue_regex: Option<String>,
    /// "Not found" comment body
    pub not_found_message: Option<String>,
}

impl Inputs {
    /// Load inputs from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load inputs through an arbitrary variable lookup
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = |name: &str| read_input(&lookup, name);
        Self {
            github_token: input(names::GITHUB_TOKEN),
            jira: JiraSettings {
                url: input(names::JIRA_URL),
                user: input(names::JIRA_USER),
                password: input(names::JIRA_PASSWORD),
            },
            issue_regex: input(names::JIRA_ISSUE_REGEX),
            not_found_message: input(names::NOT_FOUND_MESSAGE),
        }
    }

    /// The GitHub token
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the token was not supplied.
    pub fn require_github_token(&self) -> Result<&str> {
        self.github_token
            .as_deref()
            .ok_or_else(|| required(names::GITHUB_TOKEN))
    }

    /// The Jira URL
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the URL was not supplied.
    pub fn require_jira_url(&self) -> Result<&str> {
        self.jira.url.as_deref().ok_or_else(|| required(names::JIRA_URL))
    }
}

fn required(name: &str) -> GateError {
    GateError::config(format!("Input required and not supplied: {name}"))
}

/// Read `INPUT_<NAME>`, falling back to `<NAME>`
fn read_input<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let action_name = format!("INPUT_{}", name.replace(' ', "_").to_uppercase());
    [action_name.as_str(), name]
        .into_iter()
        .filter_map(lookup)
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}
