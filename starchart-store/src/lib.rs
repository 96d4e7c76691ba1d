// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `Starchart` Store
//!
//! Output file persistence for the `Starchart` exporter.
//!
//! This crate provides:
//!
//! - [`persistence::save_record`] - Atomic pretty-printed JSON writes
//! - [`persistence::load_record`] - Reading a saved record back
//! - [`StoreError`] - Persistence error type (never retried)

pub mod error;
pub mod persistence;

pub use error::StoreError;
pub use persistence::{load_record, save_record};
#[cfg(test)]
mod persistence_tests;
