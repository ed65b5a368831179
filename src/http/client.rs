//! HTTP client that turns non-success statuses into [`RequestFailed`].

use anyhow::{Context, Result};
use log::debug;
use reqwest::header::LINK;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::error::RequestFailed;
use super::link::next_link;

/// One page of a paginated collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: T,
    /// Absolute URL of the following page, taken from the `Link` header.
    pub next: Option<String>,
}

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Performs a GET request and deserializes the JSON response.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET JSON from {}...", url);

        let response = self.send(url).await?;

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    /// Performs a GET request for one page of a collection.
    ///
    /// A relative `next` target is resolved against the URL that was actually
    /// fetched (after redirects).
    #[tracing::instrument(skip(self))]
    pub async fn get_page<T: DeserializeOwned>(&self, url: &str) -> Result<Page<T>> {
        debug!("GET page from {}...", url);

        let response = self.send(url).await?;

        let next = response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(next_link)
            .map(|link| response.url().join(&link))
            .transpose()
            .with_context(|| format!("Invalid next link in response from {}", url))?
            .map(String::from);

        let items = response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))?;

        Ok(Page { items, next })
    }

    async fn send(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestFailed::new(url, status).into());
        }

        Ok(response)
    }
}
