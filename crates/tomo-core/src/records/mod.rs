//! Record store for the extracted character documents.
//!
//! The store reads the summary index once and the per-character detail
//! documents on demand, through a [`RecordSource`] that is either a local
//! directory ([`FileSource`]) or a static HTTP host ([`HttpSource`]).

mod error;
mod models;
mod source;

pub use error::RecordError;
pub use models::{
    Character, CharacterDetail, CharacterSummary, Personality, Profile, RelationshipEdge,
    SummaryIndex,
};
pub use source::{FileSource, HttpSource};

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use serde::de::DeserializeOwned;

use crate::config::DataConfig;

/// Read-only access to raw record documents.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the bytes of a document, by path relative to the data root.
    async fn fetch(&self, relative: &str) -> Result<Vec<u8>, RecordError>;

    /// Human-readable location of a document, used in messages.
    fn locate(&self, relative: &str) -> String;
}

/// Build the source described by the data configuration.
pub fn source_from_config(config: &DataConfig) -> Arc<dyn RecordSource> {
    if config.is_remote() {
        Arc::new(HttpSource::new(config.data_dir.clone()))
    } else {
        Arc::new(FileSource::new(config.data_dir.clone()))
    }
}

/// Loads and indexes character records.
#[derive(Clone)]
pub struct RecordStore {
    source: Arc<dyn RecordSource>,
    summary_file: String,
}

impl RecordStore {
    pub fn new(source: Arc<dyn RecordSource>, summary_file: impl Into<String>) -> Self {
        Self {
            source,
            summary_file: summary_file.into(),
        }
    }

    pub fn from_config(config: &DataConfig) -> Self {
        Self::new(source_from_config(config), config.summary_file.clone())
    }

    /// All summaries, ordered by `index`.
    pub async fn summaries(&self) -> Result<Vec<CharacterSummary>, RecordError> {
        let index: SummaryIndex = self.fetch_json(&self.summary_file).await?;
        let summaries = index.into_sorted();
        tracing::debug!(count = summaries.len(), "Loaded summary index");
        Ok(summaries)
    }

    /// The detail document of one character.
    pub async fn detail(&self, summary: &CharacterSummary) -> Result<CharacterDetail, RecordError> {
        self.fetch_json(&summary.filename).await
    }

    /// Fetch every detail document concurrently and wait for all of them.
    ///
    /// A character whose document cannot be loaded is logged and left out;
    /// the remaining characters keep their summary order.
    pub async fn characters(&self, summaries: &[CharacterSummary]) -> Vec<Character> {
        let fetches = summaries.iter().map(|summary| async move {
            match self.detail(summary).await {
                Ok(detail) => Some(Character {
                    summary: summary.clone(),
                    detail,
                }),
                Err(e) => {
                    tracing::warn!(filename = %summary.filename, "Error loading Mii: {}", e);
                    None
                }
            }
        });

        join_all(fetches).await.into_iter().flatten().collect()
    }

    /// Summary index plus every loadable detail document.
    pub async fn load_all(&self) -> Result<Vec<Character>, RecordError> {
        let summaries = self.summaries().await?;
        let characters = self.characters(&summaries).await;
        tracing::info!(
            loaded = characters.len(),
            total = summaries.len(),
            "Loaded Mii records"
        );
        Ok(characters)
    }

    /// Look a character up by `index` or by nickname (case-insensitive).
    pub async fn find(&self, key: &str) -> Result<CharacterSummary, RecordError> {
        let summaries = self.summaries().await?;
        find_summary(&summaries, key)
            .cloned()
            .ok_or_else(|| RecordError::NotFound(key.to_string()))
    }

    async fn fetch_json<T: DeserializeOwned>(&self, relative: &str) -> Result<T, RecordError> {
        let bytes = self.source.fetch(relative).await?;
        serde_json::from_slice(&bytes).map_err(|e| RecordError::json(self.source.locate(relative), e))
    }
}

/// Find a summary by numeric `index` first, then by nickname.
pub fn find_summary<'a>(summaries: &'a [CharacterSummary], key: &str) -> Option<&'a CharacterSummary> {
    let key = key.trim();
    if let Ok(index) = key.parse::<i64>() {
        if let Some(found) = summaries.iter().find(|s| s.index == index) {
            return Some(found);
        }
    }
    summaries
        .iter()
        .find(|s| s.nickname.eq_ignore_ascii_case(key))
}
