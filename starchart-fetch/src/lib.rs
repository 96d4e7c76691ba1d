// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `Starchart` Fetch
//!
//! GraphQL star-history fetching for the `Starchart` exporter.
//!
//! This crate turns an `(owner, name, token)` triple into a
//! [`starchart_core::RepositoryRecord`]:
//!
//! - [`transport::GraphqlTransport`] - One-query transport seam, with
//!   [`transport::HttpTransport`] as the reqwest-backed implementation
//! - [`retry::RetryStrategy`] - Bounded exponential backoff between attempts
//! - [`github::StarFetcher`] - Cursor-paginated stargazer fetch loop
//!
//! ## Example
//!
//! ```ignore
//! use starchart_fetch::{HttpTransport, StarFetcher};
//!
//! let transport = HttpTransport::new(&token)?;
//! let record = StarFetcher::new(transport).fetch("octo", "demo").await?;
//! ```

pub mod error;
pub mod github;
pub mod retry;
pub mod transport;

// Re-export key types at crate root
pub use error::FetchError;
pub use github::{FetchOptions, StarFetcher};
pub use retry::RetryStrategy;
pub use transport::{GITHUB_GRAPHQL_ENDPOINT, GraphqlTransport, HttpTransport};
