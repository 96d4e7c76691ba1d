//! GraphQL transport layer.
//!
//! The [`GraphqlTransport`] trait is the seam between the fetch logic and
//! the network: production code goes through [`HttpTransport`] (reqwest),
//! tests substitute a scripted transport.

use async_trait::async_trait;
use reqwest::header::{self, HeaderValue};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::error::FetchError;

/// GitHub's public GraphQL endpoint.
pub const GITHUB_GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";

/// Per-request timeout. Bounds the duration of a single attempt
/// independently of the retry policy.
const REQUEST_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Transport Trait
// ============================================================================

/// Executes one GraphQL query and returns the raw response body.
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    /// Posts `{query, variables}` to the endpoint and returns the parsed
    /// JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] for network failures,
    /// [`FetchError::RemoteQuery`] for non-success HTTP statuses, and
    /// [`FetchError::MalformedResponse`] when the body is not JSON.
    async fn execute(&self, query: &str, variables: &Value) -> Result<Value, FetchError>;
}

// ============================================================================
// HTTP Transport
// ============================================================================

/// Bearer-authenticated HTTP transport backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
    auth: HeaderValue,
}

impl HttpTransport {
    /// Creates a transport for the public GitHub API.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidToken`] if the token cannot form an
    /// `Authorization` header, or [`FetchError::Transport`] if the HTTP
    /// client cannot be built.
    pub fn new(token: &str) -> Result<Self, FetchError> {
        Self::with_endpoint(token, GITHUB_GRAPHQL_ENDPOINT)
    }

    /// Creates a transport for a custom GraphQL endpoint, e.g. a GitHub
    /// Enterprise installation.
    pub fn with_endpoint(token: &str, endpoint: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("starchart/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| FetchError::InvalidToken(e.to_string()))?;
        auth.set_sensitive(true);

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            auth,
        })
    }

    /// Returns the endpoint this transport posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GraphqlTransport for HttpTransport {
    async fn execute(&self, query: &str, variables: &Value) -> Result<Value, FetchError> {
        debug!(endpoint = %self.endpoint, "Posting GraphQL query");

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::AUTHORIZATION, self.auth.clone())
            .json(&serde_json::json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Keep the query out of the error itself; it is diagnostic only.
            debug!(status = %status, query, "Query rejected by the API");
            return Err(FetchError::RemoteQuery {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| FetchError::MalformedResponse(format!("JSON error: {e}")))
    }
}

// ============================================================================
// Tests
// ============================================================================
