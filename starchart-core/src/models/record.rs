//! Star history types.
//!
//! This module contains the types that model a repository's star history:
//! - [`StarEvent`] - One star registration with its timestamp
//! - [`RepositoryRecord`] - The full record written to the output file

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Star Event
// ============================================================================

/// A single star registration.
///
/// One event is constructed per stargazer edge in the API response. Events
/// are immutable once built and owned by the [`RepositoryRecord`] that
/// contains them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarEvent {
    /// When the star was registered.
    #[serde(with = "history_timestamp")]
    pub date: DateTime<Utc>,
    /// Stars represented by this event. Always 1 in the current output
    /// format; kept for wire compatibility with existing consumers.
    pub stars: u32,
}

impl StarEvent {
    /// Creates a new event for a single star at the given time.
    pub fn new(date: DateTime<Utc>) -> Self {
        Self { date, stars: 1 }
    }
}

// ============================================================================
// Repository Record
// ============================================================================

/// A repository's star history as reported by the hosting platform.
///
/// `star_history` is ordered ascending by date, exactly as returned by the
/// API; it is never re-sorted locally. Its length is bounded by the fetch
/// cap and may legitimately be smaller than `star_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    /// Repository identifier in `owner/name` form.
    pub repo_name: String,
    /// Total star count reported by the API at fetch time.
    pub star_count: u64,
    /// Ordered star events, ascending by date.
    pub star_history: Vec<StarEvent>,
}

impl RepositoryRecord {
    /// Creates a record for the given repository.
    pub fn new(owner: &str, name: &str, star_count: u64, star_history: Vec<StarEvent>) -> Self {
        Self {
            repo_name: format!("{owner}/{name}"),
            star_count,
            star_history,
        }
    }

    /// Returns true if the history holds fewer events than the total count.
    ///
    /// This happens whenever the fetch cap is smaller than the repository's
    /// star count.
    pub fn is_truncated(&self) -> bool {
        (self.star_history.len() as u64) < self.star_count
    }
}

// ============================================================================
// Timestamp Format
// ============================================================================

/// Serde adapter for the output file's timestamp format.
///
/// Timestamps are written as `YYYY-MM-DD HH:MM:SS[.ffffff]+00:00` rather
/// than numeric epochs, so the file stays human-readable and diffs cleanly.
/// The fractional part is omitted when zero and parsed back if present, so
/// values round-trip to sub-second precision.
pub(crate) mod history_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f%:z";

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_str(&s, FORMAT)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
