//! GitHub stargazer query and fetch loop.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, instrument, warn};

use starchart_core::{RepositoryRecord, StarEvent};

use crate::error::FetchError;
use crate::retry::RetryStrategy;
use crate::transport::GraphqlTransport;

// ============================================================================
// Constants
// ============================================================================

/// Stargazer history query. One page per execution, cursor-driven.
const STAR_HISTORY_QUERY: &str = "\
query ($owner: String!, $name: String!, $first: Int!, $after: String) {
    repository(owner: $owner, name: $name) {
        stargazers(first: $first, after: $after, orderBy: {field: STARRED_AT, direction: ASC}) {
            edges {
                starredAt
            }
            pageInfo {
                hasNextPage
                endCursor
            }
        }
        stargazerCount
    }
}";

/// Largest page size GitHub accepts for stargazer connections.
const MAX_PAGE_SIZE: u32 = 100;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct QueryData {
    repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryNode {
    stargazers: StargazerConnection,
    stargazer_count: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StargazerConnection {
    edges: Vec<StargazerEdge>,
    page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StargazerEdge {
    starred_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_next_page: bool,
    end_cursor: Option<String>,
}

/// Extracts the repository node from a raw GraphQL response body.
fn parse_repository(body: Value) -> Result<RepositoryNode, FetchError> {
    let data = body
        .get("data")
        .cloned()
        .ok_or_else(|| FetchError::MalformedResponse("response has no `data` field".into()))?;

    let parsed: QueryData = serde_json::from_value(data)
        .map_err(|e| FetchError::MalformedResponse(format!("unexpected shape: {e}")))?;

    parsed
        .repository
        .ok_or_else(|| FetchError::MalformedResponse("`data.repository` is null".into()))
}

// ============================================================================
// Fetch Options
// ============================================================================

/// Pagination settings for a fetch.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Stargazer edges requested per page, clamped to GitHub's limit of 100.
    pub page_size: u32,
    /// Upper bound on accumulated events across all pages.
    pub max_events: usize,
}

impl FetchOptions {
    /// Creates options with the given event cap and a full page size.
    pub fn with_max_events(max_events: usize) -> Self {
        Self {
            page_size: MAX_PAGE_SIZE,
            max_events,
        }
    }

    /// Sets the page size, clamped to `[1, 100]`.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }
}

impl Default for FetchOptions {
    /// One full page of up to 100 events.
    fn default() -> Self {
        Self::with_max_events(MAX_PAGE_SIZE as usize)
    }
}

// ============================================================================
// Star Fetcher
// ============================================================================

/// Fetches a repository's star history through a [`GraphqlTransport`].
///
/// Each page request is wrapped in the retry policy; a transient failure
/// mid-pagination retries that page rather than restarting the whole fetch.
#[derive(Debug)]
pub struct StarFetcher<T> {
    transport: T,
    retry: RetryStrategy,
    options: FetchOptions,
}

impl<T: GraphqlTransport> StarFetcher<T> {
    /// Creates a fetcher with the default retry policy and options.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            retry: RetryStrategy::default(),
            options: FetchOptions::default(),
        }
    }

    /// Sets the retry strategy.
    pub fn with_retry_strategy(mut self, retry: RetryStrategy) -> Self {
        self.retry = retry;
        self
    }

    /// Sets the pagination options.
    pub fn with_options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    /// Fetches the star history for `owner/name`.
    ///
    /// Accumulates stargazer edges page by page, ascending by star time,
    /// until the API reports no further pages or the event cap is reached.
    /// `star_count` always reflects the API's total, which may exceed the
    /// number of events returned.
    ///
    /// # Errors
    ///
    /// Returns the final attempt's [`FetchError`] once the retry budget for
    /// a page is exhausted.
    #[instrument(skip(self), fields(repo = %format_args!("{owner}/{name}")))]
    pub async fn fetch(&self, owner: &str, name: &str) -> Result<RepositoryRecord, FetchError> {
        let mut events: Vec<StarEvent> = Vec::new();
        let mut cursor: Option<String> = None;
        let mut star_count = 0u64;

        loop {
            let remaining = self.options.max_events - events.len();
            let first = (self.options.page_size as usize).min(remaining);
            let variables = json!({
                "owner": owner,
                "name": name,
                "first": first,
                "after": cursor,
            });

            let repo = self.fetch_page(&variables).await?;
            star_count = repo.stargazer_count;

            let page_len = repo.stargazers.edges.len();
            events.extend(
                repo.stargazers
                    .edges
                    .into_iter()
                    .map(|edge| StarEvent::new(edge.starred_at)),
            );
            events.truncate(self.options.max_events);
            debug!(page_len, total = events.len(), "Page received");

            let page_info = repo.stargazers.page_info;
            if events.len() >= self.options.max_events || !page_info.has_next_page {
                break;
            }
            match page_info.end_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        Ok(RepositoryRecord::new(owner, name, star_count, events))
    }

    /// Executes one page query under the retry policy.
    async fn fetch_page(&self, variables: &Value) -> Result<RepositoryNode, FetchError> {
        let mut attempt = 0;

        loop {
            attempt += 1;
            debug!(attempt, "Sending stargazer query");

            let result = self
                .transport
                .execute(STAR_HISTORY_QUERY, variables)
                .await
                .and_then(parse_repository);

            match result {
                Ok(repo) => return Ok(repo),
                Err(e) if attempt < self.retry.max_attempts && e.is_retryable() => {
                    let delay = self.retry.delay_for_attempt(attempt);
                    warn!(
                        error = %e,
                        delay_secs = delay.as_secs(),
                        "Query failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
