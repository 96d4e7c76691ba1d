// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `Starchart` Core
//!
//! Core types and models for the `Starchart` star-history exporter.
//!
//! This crate provides the foundational types used across all other
//! `Starchart` crates:
//!
//! - [`StarEvent`] - A single star registration with its timestamp
//! - [`RepositoryRecord`] - A repository's identity, total star count, and
//!   ordered star history
//! - [`CoreError`] - Shared error type for model validation and serialization

pub mod error;
pub mod models;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{RepositoryRecord, StarEvent};
