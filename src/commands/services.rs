//! Construction of the authenticated HTTP client.

use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::http::HttpClient;

/// Build an HTTP client that sends `token` as a bearer credential on every request
pub fn build_http_client(token: &str) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();

    let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
    auth_value.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth_value);
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );
    debug!("HTTP client configured with authentication");

    let client = Client::builder()
        .user_agent("ghrepos-cli")
        .default_headers(headers)
        .build()?;

    Ok(HttpClient::new(client))
}
