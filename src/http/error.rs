//! The single failure kind for HTTP exchanges that reach the server.

use reqwest::StatusCode;

/// A request that completed with a non-success status.
///
/// Any page or detail request ending this way aborts the whole run; it is
/// never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFailed {
    pub url: String,
    pub status: StatusCode,
}

impl RequestFailed {
    pub fn new(url: impl Into<String>, status: StatusCode) -> Self {
        Self {
            url: url.into(),
            status,
        }
    }

    fn hint(&self) -> Option<&'static str> {
        match self.status {
            StatusCode::UNAUTHORIZED => Some("Check your GITHUB_TOKEN."),
            StatusCode::FORBIDDEN => {
                Some("The API rate limit may be exhausted or the token lacks access.")
            }
            StatusCode::TOO_MANY_REQUESTS => Some("API rate limit exceeded, try again later."),
            _ => None,
        }
    }
}

impl std::fmt::Display for RequestFailed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to fetch data from {}: HTTP {}", self.url, self.status)?;
        if let Some(hint) = self.hint() {
            write!(f, ". {}", hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for RequestFailed {}
