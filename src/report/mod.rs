//! Enriched repository records and their ordering.

pub mod markdown;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::github::{RepoDetails, RepoSource, RepoSummary};

/// One table row: a listing entry combined with its detail record.
#[derive(Debug, Clone, PartialEq)]
pub struct RepoReport {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stars: u64,
    pub pushed_at: Option<DateTime<Utc>>,
}

impl RepoReport {
    pub fn new(summary: RepoSummary, details: RepoDetails) -> Self {
        Self {
            name: summary.name,
            full_name: summary.full_name,
            description: summary.description,
            html_url: summary.html_url,
            stars: details.stargazers_count,
            pushed_at: details.pushed_at,
        }
    }
}

/// Fetches details for each summary, one request at a time, preserving order.
///
/// The first failed request aborts enrichment.
#[tracing::instrument(skip(source, summaries))]
pub async fn enrich<S: RepoSource + ?Sized>(
    source: &S,
    summaries: Vec<RepoSummary>,
) -> Result<Vec<RepoReport>> {
    let total = summaries.len();
    info!("Fetching details for {} repositories", total);

    let mut reports = Vec::with_capacity(total);
    for (index, summary) in summaries.into_iter().enumerate() {
        debug!("[{}/{}] {}", index + 1, total, summary.full_name);
        let details = source
            .get_repo_details(&summary.url)
            .await
            .with_context(|| format!("Failed to fetch details for {}", summary.full_name))?;
        reports.push(RepoReport::new(summary, details));
    }

    Ok(reports)
}

/// Most recently pushed first. Equal timestamps keep their input order and
/// never-pushed repositories go last.
pub fn sort_by_last_push(reports: &mut [RepoReport]) {
    reports.sort_by(|a, b| b.pushed_at.cmp(&a.pushed_at));
}
