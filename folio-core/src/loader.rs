use std::path::{Path, PathBuf};

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use url::Url;

use crate::error::LoadError;
use crate::record::{ContentRecord, RecordDocument};

/// Where the static record document lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RecordSource {
    /// `path` is resolved against `base`, the way a page fetches a same-origin
    /// relative path.
    Url { base: String, path: String },
    File { path: PathBuf },
}

impl Default for RecordSource {
    fn default() -> Self {
        RecordSource::File {
            path: PathBuf::from("data.json"),
        }
    }
}

impl RecordSource {
    pub fn resolve_url(base: &str, path: &str) -> Result<Url, LoadError> {
        Ok(Url::parse(base)?.join(path)?)
    }
}

pub fn parse_records(bytes: &[u8]) -> Result<Vec<ContentRecord>, LoadError> {
    let document: RecordDocument = serde_json::from_slice(bytes)?;
    Ok(document.blog)
}

pub async fn fetch_records(client: &Client, url: Url) -> Result<Vec<ContentRecord>, LoadError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status));
    }
    let bytes = response.bytes().await?;
    parse_records(&bytes)
}

pub async fn read_records(path: impl AsRef<Path>) -> Result<Vec<ContentRecord>, LoadError> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    parse_records(&bytes)
}

async fn try_load(source: &RecordSource, client: &Client) -> Result<Vec<ContentRecord>, LoadError> {
    match source {
        RecordSource::Url { base, path } => {
            let url = RecordSource::resolve_url(base, path)?;
            fetch_records(client, url).await
        }
        RecordSource::File { path } => read_records(path).await,
    }
}

/// Single attempt; any failure is logged and yields an empty set.
pub async fn load_records(source: &RecordSource, client: &Client) -> Vec<ContentRecord> {
    match try_load(source, client).await {
        Ok(records) => {
            info!(count = records.len(), "content records loaded");
            records
        }
        Err(err) => {
            warn!(error = %err, ?source, "failed to load content records");
            Vec::new()
        }
    }
}
