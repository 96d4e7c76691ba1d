//! Output file persistence.
//!
//! Writes a [`RepositoryRecord`] to disk as pretty-printed JSON. Writes go
//! through a temp file in the same directory followed by a rename, so a
//! crash mid-write never leaves a truncated destination file.

use serde::Serialize;
use std::path::Path;
use tracing::debug;

use starchart_core::RepositoryRecord;

use crate::error::StoreError;

/// Indentation used in the output file.
const INDENT: &[u8] = b"    ";

/// Serializes a value to JSON with 4-space indentation.
fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

/// Saves a record to `path` as JSON.
///
/// Creates missing parent directories, then writes atomically via a temp
/// file and rename in the destination directory.
///
/// # Errors
///
/// Returns [`StoreError::Io`] when the path is not writable and
/// [`StoreError::Serialization`] if the record cannot be encoded.
pub async fn save_record(record: &RepositoryRecord, path: &Path) -> Result<(), StoreError> {
    debug!(path = %path.display(), repo = %record.repo_name, "Saving star history");

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!(path = %parent.display(), "Creating output directory");
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let json = to_pretty_json(record)?;

    // Write atomically (write to temp file, then rename)
    let temp_path = path.with_extension("json.tmp");
    tokio::fs::write(&temp_path, &json).await?;
    tokio::fs::rename(&temp_path, path).await?;

    debug!(path = %path.display(), "Star history saved");
    Ok(())
}

/// Loads a previously saved record from `path`.
pub async fn load_record(path: &Path) -> Result<RepositoryRecord, StoreError> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}
