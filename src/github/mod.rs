//! GitHub REST API access: paged repository listings and repository details.

mod client;
mod types;

#[cfg(test)]
pub use client::MockRepoSource;
pub use client::{DEFAULT_API_URL, GitHub, RepoSource};
pub use types::{RepoDetails, RepoSummary};
