use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;

use super::error::RecordError;
use super::RecordSource;

/// Reads record documents from a local directory.
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the documents are read from.
    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

#[async_trait]
impl RecordSource for FileSource {
    async fn fetch(&self, relative: &str) -> Result<Vec<u8>, RecordError> {
        let path = self.root.join(relative);
        tokio::fs::read(&path)
            .await
            .map_err(|e| RecordError::io(&path, e))
    }

    fn locate(&self, relative: &str) -> String {
        self.root.join(relative).display().to_string()
    }
}

/// Fetches record documents from a static HTTP host.
///
/// Works with any plain file server, e.g. the site the records were
/// published to or `python3 -m http.server` in the export folder.
pub struct HttpSource {
    base_url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    async fn fetch(&self, relative: &str) -> Result<Vec<u8>, RecordError> {
        let url = self.locate(relative);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecordError::Http {
                url,
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    fn locate(&self, relative: &str) -> String {
        format!("{}/{}", self.base_url, relative.trim_start_matches('/'))
    }
}
