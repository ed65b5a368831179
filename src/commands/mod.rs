use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

use crate::{
    github::{RepoSource, RepoSummary},
    report::{enrich, markdown, sort_by_last_push},
    runtime::Runtime,
};

pub mod config;
pub mod services;

use config::{Config, Layout, Options};

pub const COMBINED_TITLE: &str = "Starred and Forked Repositories";
pub const STARRED_TITLE: &str = "Starred Repositories";
pub const FORKED_TITLE: &str = "Forked Repositories";

#[tracing::instrument(skip(runtime, options))]
pub async fn generate<R: Runtime>(runtime: R, options: Options) -> Result<()> {
    let config = Config::new(runtime, options)?;
    run(config).await
}

/// Lists starred and forked repositories, enriches and sorts them, then writes
/// the report(s).
///
/// Every document is rendered before the first file is written, so a failed
/// request leaves no output behind.
#[tracing::instrument(skip(config))]
pub async fn run<R: Runtime, S: RepoSource>(config: Config<R, S>) -> Result<()> {
    let starred = config
        .source
        .list_repos(&config.starred_url)
        .await
        .context("Failed to list starred repositories")?;
    info!("Found {} starred repositories", starred.len());

    let forked = config
        .source
        .list_repos(&config.forks_url)
        .await
        .context("Failed to list forked repositories")?;
    info!("Found {} forked repositories", forked.len());

    let documents: Vec<(PathBuf, String)> = match &config.layout {
        Layout::Combined { output } => {
            let mut all = starred;
            all.extend(forked);
            let document = build_document(&config.source, COMBINED_TITLE, all).await?;
            vec![(output.clone(), document)]
        }
        Layout::Split {
            starred: starred_path,
            forked: forked_path,
        } => {
            let starred_doc = build_document(&config.source, STARRED_TITLE, starred).await?;
            let forked_doc = build_document(&config.source, FORKED_TITLE, forked).await?;
            vec![
                (starred_path.clone(), starred_doc),
                (forked_path.clone(), forked_doc),
            ]
        }
    };

    for (path, document) in &documents {
        write_report(&config.runtime, path, document)?;
        info!(
            "Wrote {} repositories to {}",
            markdown::count_rows(document),
            path.display()
        );
    }

    Ok(())
}

async fn build_document<S: RepoSource>(
    source: &S,
    title: &str,
    summaries: Vec<RepoSummary>,
) -> Result<String> {
    let mut reports = enrich(source, summaries).await?;
    sort_by_last_push(&mut reports);
    Ok(markdown::render(title, &reports))
}

fn write_report<R: Runtime>(runtime: &R, path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        runtime.create_dir_all(parent)?;
    }
    runtime
        .write(path, document.as_bytes())
        .with_context(|| format!("Failed to write report to {}", path.display()))
}
