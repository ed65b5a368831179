//! HTTP client module with status checking and `Link` header pagination.

mod client;
mod error;
pub mod link;

pub use client::{HttpClient, Page};
pub use error::RequestFailed;
