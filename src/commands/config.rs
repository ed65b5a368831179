use anyhow::{Context, Result, bail};
use log::debug;
use std::path::PathBuf;

use crate::{
    github::{GitHub, RepoSource},
    runtime::Runtime,
};

use super::services::build_http_client;

pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Where the report(s) go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// Starred and forked repositories in one document.
    Combined { output: PathBuf },
    /// One document for starred repositories and one for forks.
    Split { starred: PathBuf, forked: PathBuf },
}

/// Settings supplied on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub user: String,
    pub api_url: Option<String>,
    pub layout: Layout,
}

pub struct Config<R: Runtime, S: RepoSource> {
    pub runtime: R,
    pub source: S,
    pub starred_url: String,
    pub forks_url: String,
    pub layout: Layout,
}

impl<R: Runtime> Config<R, GitHub> {
    pub fn new(runtime: R, options: Options) -> Result<Self> {
        let token = runtime
            .env_var(TOKEN_ENV)
            .with_context(|| format!("{} must be set to authenticate API requests", TOKEN_ENV))?;
        if token.trim().is_empty() {
            bail!("{} is set but empty", TOKEN_ENV);
        }
        debug!("Using {} for authentication: {}", TOKEN_ENV, mask(&token));

        let http_client = build_http_client(token.trim())?;
        let github = GitHub::new(http_client, options.api_url);

        Ok(Self {
            starred_url: github.starred_url(&options.user),
            forks_url: github.forks_url(&options.user),
            runtime,
            source: github,
            layout: options.layout,
        })
    }
}

/// Keeps only enough of a secret to recognise it in logs.
fn mask(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() < 12 {
        return "*********".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}*********{}", head, tail)
}
