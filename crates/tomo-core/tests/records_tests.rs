mod common;

use std::fs;
use std::sync::Arc;

use common::{abc, documents, folder_file, serve_documents, write_data_dir};
use tomo_core::config::{ChordConfig, DataConfig};
use tomo_core::records::{FileSource, HttpSource, RecordError, RecordSource, RecordStore};
use tomo_core::{RenderOutcome, ViewController};

fn store(root: &std::path::Path) -> RecordStore {
    let source = FileSource::new(root.to_string_lossy().to_string());
    RecordStore::new(Arc::new(source), "_summary.json")
}

#[tokio::test]
async fn test_load_all_in_index_order() {
    let dir = write_data_dir(&abc());
    let characters = store(dir.path()).load_all().await.unwrap();

    let names: Vec<_> = characters.iter().map(|c| c.nickname()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert_eq!(characters[0].personality_type(), "easygoing buddy");
    assert_eq!(characters[1].detail.relationships().len(), 1);
}

#[tokio::test]
async fn test_failed_detail_is_dropped() {
    let dir = write_data_dir(&abc());
    fs::write(dir.path().join("01_B/mii.json"), "{ not json").unwrap();

    let characters = store(dir.path()).load_all().await.unwrap();
    let names: Vec<_> = characters.iter().map(|c| c.nickname()).collect();
    assert_eq!(names, vec!["A", "C"]);
}

#[tokio::test]
async fn test_missing_detail_is_dropped() {
    let dir = write_data_dir(&abc());
    fs::remove_file(dir.path().join("00_A/mii.json")).unwrap();

    let characters = store(dir.path()).load_all().await.unwrap();
    assert_eq!(characters.len(), 2);
}

#[tokio::test]
async fn test_missing_summary_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let result = store(dir.path()).load_all().await;
    assert!(matches!(result, Err(RecordError::Io { .. })));
}

#[tokio::test]
async fn test_malformed_summary_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join("_summary.json"), r#"{"miis": 5}"#).unwrap();
    let result = store(dir.path()).summaries().await;
    assert!(matches!(result, Err(RecordError::Json { .. })));
}

#[tokio::test]
async fn test_find_by_index_or_nickname() {
    let dir = write_data_dir(&abc());
    let store = store(dir.path());

    assert_eq!(store.find("1").await.unwrap().nickname, "B");
    assert_eq!(store.find("c").await.unwrap().index, 2);
    assert!(matches!(store.find("Zed").await, Err(RecordError::NotFound(_))));
}

#[tokio::test]
async fn test_store_from_config() {
    let dir = write_data_dir(&abc());
    let config = DataConfig {
        data_dir: dir.path().to_string_lossy().to_string(),
        ..Default::default()
    };
    let summaries = RecordStore::from_config(&config).summaries().await.unwrap();
    assert_eq!(summaries.len(), 3);
    assert_eq!(summaries[2].folder(), "02_C");
}

#[tokio::test]
async fn test_http_error_status() {
    let mut files = documents(&abc());
    files.remove(&folder_file(1, "B"));
    let base = serve_documents(files).await;

    let source = HttpSource::new(base.clone());
    assert!(source.fetch("_summary.json").await.is_ok());
    match source.fetch(&folder_file(1, "B")).await {
        Err(RecordError::Http { url, status }) => {
            assert_eq!(status, 404);
            assert_eq!(url, format!("{}/01_B/mii.json", base));
        }
        other => panic!("expected an HTTP error, got {:?}", other.map(|b| b.len())),
    }
}

#[tokio::test]
async fn test_http_failed_detail_is_dropped() {
    let mut files = documents(&abc());
    files.remove(&folder_file(1, "B"));
    let base = serve_documents(files).await;

    let store = RecordStore::new(Arc::new(HttpSource::new(base)), "_summary.json");
    let characters = store.load_all().await.unwrap();
    let names: Vec<_> = characters.iter().map(|c| c.nickname()).collect();
    assert_eq!(names, vec!["A", "C"]);
}

#[tokio::test]
async fn test_http_missing_summary_fails_activation() {
    let mut files = documents(&abc());
    files.remove("_summary.json");
    let base = serve_documents(files).await;

    let config = DataConfig {
        data_dir: base,
        ..Default::default()
    };
    let store = RecordStore::from_config(&config);
    assert!(matches!(
        store.summaries().await,
        Err(RecordError::Http { status: 404, .. })
    ));

    let mut controller = ViewController::new(ChordConfig::default());
    match controller.activate(&store).await {
        RenderOutcome::Failed { message } => assert!(message.contains("404"), "{message}"),
        other => panic!("expected a failed activation, got {:?}", other),
    }
    assert!(controller.context().is_none());
}
