//! Domain models for Starchart.
//!
//! This module contains the data structures representing a repository's
//! star history as fetched from the hosting platform and as written to disk.
//!
//! ## Submodules
//!
//! - [`record`] - Star history types (`StarEvent`, `RepositoryRecord`)

mod record;

// Re-export everything at the models level
pub use record::{RepositoryRecord, StarEvent};
