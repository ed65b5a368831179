use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository as it appears in a listing page (`/users/{user}/starred`,
/// `/users/{user}/repos`).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RepoSummary {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    /// API URL of the repository, used to fetch [`RepoDetails`].
    pub url: String,
}

/// Fields of `/repos/{owner}/{repo}` that listings do not carry reliably.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RepoDetails {
    pub stargazers_count: u64,
    /// `null` for a repository that has never been pushed to.
    pub pushed_at: Option<DateTime<Utc>>,
}
