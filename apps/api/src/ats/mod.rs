//! ATS proxy client — the single point of entry for outbound job fetches.
//!
//! The proxy normalizes Greenhouse, Lever, Ashby and friends into one JSON
//! shape at `<base>/<board>/<slug>`. Nothing else in the service talks to it.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, error};

use crate::models::posting::{CompanyTarget, JobPosting, ProxyJob};

pub const DEFAULT_PROXY_BASE_URL: &str = "https://jobber.mihir.ch";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed proxy response for {board}/{slug}: {source}")]
    Parse {
        board: String,
        slug: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Outcome of fetching one company.
#[derive(Debug)]
pub enum CompanyFetch {
    Fetched(Vec<JobPosting>),
    /// The proxy answered with a non-success status; the company is skipped.
    Skipped { status: StatusCode },
}

/// A per-company posting source. Carried in `AppState` as `Arc<dyn JobSource>`.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch_company(&self, target: &CompanyTarget) -> Result<CompanyFetch, FetchError>;
}

/// reqwest-backed `JobSource` for the ATS proxy.
#[derive(Clone)]
pub struct ProxyClient {
    client: Client,
    base_url: String,
}

impl ProxyClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// `<base>/<board>/<slug>`
    pub fn company_url(&self, target: &CompanyTarget) -> String {
        format!("{}/{}/{}", self.base_url, target.board, target.slug)
    }
}

#[async_trait]
impl JobSource for ProxyClient {
    async fn fetch_company(&self, target: &CompanyTarget) -> Result<CompanyFetch, FetchError> {
        let url = self.company_url(target);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Ok(CompanyFetch::Skipped { status });
        }

        let body = response.text().await?;
        let jobs: Vec<ProxyJob> =
            serde_json::from_str(&body).map_err(|source| FetchError::Parse {
                board: target.board.clone(),
                slug: target.slug.clone(),
                source,
            })?;

        Ok(CompanyFetch::Fetched(
            jobs.into_iter()
                .map(|job| JobPosting::from_proxy(job, target))
                .collect(),
        ))
    }
}

/// Fetches every target in order and flattens the postings.
///
/// Targets are fetched strictly one after another; each request completes
/// before the next is sent, and the output preserves target order.
/// A skipped company contributes nothing. A `FetchError` aborts the batch.
pub async fn fetch_postings(
    source: &dyn JobSource,
    targets: &[CompanyTarget],
) -> Result<Vec<JobPosting>, FetchError> {
    let mut all_postings = Vec::new();

    for target in targets {
        match source.fetch_company(target).await? {
            CompanyFetch::Fetched(postings) => {
                debug!(
                    "Fetched {} postings from {}/{}",
                    postings.len(),
                    target.board,
                    target.slug
                );
                all_postings.extend(postings);
            }
            CompanyFetch::Skipped { status } => {
                error!(
                    board = %target.board,
                    slug = %target.slug,
                    status = status.as_u16(),
                    "Failed to fetch company postings"
                );
            }
        }
    }

    Ok(all_postings)
}
