//! Persistence round-trip and edge case tests.

use chrono::{TimeZone, Utc};
use std::path::PathBuf;
use tempfile::TempDir;

use crate::persistence::{load_record, save_record};
use starchart_core::{RepositoryRecord, StarEvent};

// ============================================================================
// Round-Trip Tests
// ============================================================================

#[tokio::test]
async fn test_save_and_load_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("stars.json");

    let record = RepositoryRecord::new(
        "octo",
        "demo",
        42,
        vec![
            StarEvent::new(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()),
            StarEvent::new(Utc.with_ymd_and_hms(2020, 1, 2, 12, 0, 0).unwrap()),
        ],
    );

    save_record(&record, &file_path).await.unwrap();
    let loaded = load_record(&file_path).await.unwrap();

    assert_eq!(loaded.repo_name, record.repo_name);
    assert_eq!(loaded.star_count, record.star_count);
    assert_eq!(loaded.star_history, record.star_history);
}

#[tokio::test]
async fn test_output_format() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("stars.json");

    let record = RepositoryRecord::new(
        "octo",
        "demo",
        42,
        vec![StarEvent::new(
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        )],
    );

    save_record(&record, &file_path).await.unwrap();
    let content = tokio::fs::read_to_string(&file_path).await.unwrap();

    // 4-space indentation, stable field order, string timestamps
    assert!(content.starts_with("{\n    \"repo_name\": \"octo/demo\""));
    assert!(content.contains("\"star_count\": 42"));
    assert!(content.contains("\"date\": \"2020-01-01 00:00:00+00:00\""));
    assert!(content.contains("\"stars\": 1"));
}

#[tokio::test]
async fn test_empty_history_is_valid_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("stars.json");

    let record = RepositoryRecord::new("octo", "quiet", 0, vec![]);
    save_record(&record, &file_path).await.unwrap();

    let loaded = load_record(&file_path).await.unwrap();
    assert_eq!(loaded.star_count, 0);
    assert!(loaded.star_history.is_empty());

    let content = tokio::fs::read_to_string(&file_path).await.unwrap();
    assert!(content.contains("\"star_history\": []"));
}

// ============================================================================
// Filesystem Behavior
// ============================================================================

#[tokio::test]
async fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let nested_path = temp_dir.path().join("deeply").join("nested").join("stars.json");

    let record = RepositoryRecord::new("octo", "demo", 0, vec![]);
    save_record(&record, &nested_path).await.unwrap();
    assert!(nested_path.exists());
}

#[tokio::test]
async fn test_save_overwrites_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("stars.json");

    let first = RepositoryRecord::new("octo", "demo", 1, vec![]);
    let second = RepositoryRecord::new("octo", "demo", 2, vec![]);

    save_record(&first, &file_path).await.unwrap();
    save_record(&second, &file_path).await.unwrap();

    let loaded = load_record(&file_path).await.unwrap();
    assert_eq!(loaded.star_count, 2);
}

#[tokio::test]
async fn test_no_temp_file_left_behind() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("stars.json");

    let record = RepositoryRecord::new("octo", "demo", 0, vec![]);
    save_record(&record, &file_path).await.unwrap();

    let mut entries = tokio::fs::read_dir(temp_dir.path()).await.unwrap();
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await.unwrap() {
        names.push(entry.file_name());
    }
    assert_eq!(names, vec!["stars.json"]);
}

#[tokio::test]
async fn test_save_to_unwritable_path_fails() {
    let record = RepositoryRecord::new("octo", "demo", 0, vec![]);
    let result = save_record(&record, &PathBuf::from("/proc/starchart/stars.json")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_load_nonexistent_file() {
    let result = load_record(&PathBuf::from("/nonexistent/stars.json")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_load_rejects_invalid_json() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("stars.json");
    tokio::fs::write(&file_path, "{ truncated").await.unwrap();

    let result = load_record(&file_path).await;
    assert!(result.is_err());
}
