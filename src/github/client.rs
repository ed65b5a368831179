use anyhow::Result;
use async_trait::async_trait;
use log::debug;

use crate::http::{HttpClient, Page};

use super::types::{RepoDetails, RepoSummary};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepoSource: Send + Sync {
    /// Fetches every repository reachable from `url` by following `next` links.
    async fn list_repos(&self, url: &str) -> Result<Vec<RepoSummary>>;

    /// Fetches the detail record at a summary's API `url`.
    async fn get_repo_details(&self, url: &str) -> Result<RepoDetails>;
}

pub struct GitHub {
    http_client: HttpClient,
    api_url: String,
}

impl GitHub {
    #[tracing::instrument(skip(http_client, api_url))]
    pub fn new(http_client: HttpClient, api_url: Option<String>) -> Self {
        let api_url = api_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            http_client,
            api_url,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// First page of the repositories `user` has starred.
    pub fn starred_url(&self, user: &str) -> String {
        format!("{}/users/{}/starred?per_page=100", self.api_url, user)
    }

    /// First page of the forks owned by `user`.
    pub fn forks_url(&self, user: &str) -> String {
        format!("{}/users/{}/repos?type=fork&per_page=100", self.api_url, user)
    }
}

#[async_trait]
impl RepoSource for GitHub {
    #[tracing::instrument(skip(self))]
    async fn list_repos(&self, url: &str) -> Result<Vec<RepoSummary>> {
        let mut repos = Vec::new();
        let mut next = Some(url.to_string());
        let mut page_number = 0;

        while let Some(page_url) = next {
            page_number += 1;
            debug!("Fetching repositories page {} from {}...", page_number, page_url);

            let page: Page<Vec<RepoSummary>> = self.http_client.get_page(&page_url).await?;

            debug!(
                "Page {} returned {} repositories",
                page_number,
                page.items.len()
            );
            repos.extend(page.items);
            next = page.next;
        }

        Ok(repos)
    }

    #[tracing::instrument(skip(self))]
    async fn get_repo_details(&self, url: &str) -> Result<RepoDetails> {
        debug!("Fetching repo details from {}...", url);
        self.http_client.get_json(url).await
    }
}
