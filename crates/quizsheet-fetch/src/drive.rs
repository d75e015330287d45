//! Google Drive share-link fetcher.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use tracing::instrument;

use quizsheet_core::error::{Result, SheetError};
use quizsheet_core::traits::ContentFetcher;

pub const DEFAULT_BASE_URL: &str = "https://drive.google.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
const STORAGE_HOST: &str = "drive.google.com";

/// Fetches files shared through Drive links by rewriting them into
/// direct-download URLs.
pub struct DriveFetcher {
    base_url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl DriveFetcher {
    /// `base_url` is where download requests go; an empty string selects
    /// [`DEFAULT_BASE_URL`].
    pub fn new(base_url: &str, timeout_secs: u64) -> anyhow::Result<Self> {
        let base = if base_url.is_empty() {
            DEFAULT_BASE_URL
        } else {
            base_url
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            base_url: base.trim_end_matches('/').to_string(),
            timeout_secs,
            client,
        })
    }

    /// Direct-download URL for a file id.
    pub fn download_url(&self, file_id: &str) -> String {
        format!("{}/uc?export=download&id={file_id}", self.base_url)
    }
}

/// Extract the file id from a share link.
///
/// Recognizes `...?id=<ID>` and `.../d/<ID>/...` shapes on the Drive host.
pub fn extract_file_id(link: &str) -> Result<String> {
    if !link.contains(STORAGE_HOST) {
        return Err(SheetError::InvalidLink(format!(
            "link does not appear to be a valid Google Drive URL: {link}"
        )));
    }

    let id = if let Some((_, rest)) = link.rsplit_once("id=") {
        rest.split(['&', '#']).next().unwrap_or_default()
    } else if let Some((_, rest)) = link.split_once("/d/") {
        rest.split(['/', '?', '#']).next().unwrap_or_default()
    } else {
        ""
    };

    if id.is_empty() {
        return Err(SheetError::InvalidLink(format!(
            "no file id found in link: {link}"
        )));
    }
    Ok(id.to_string())
}

#[async_trait]
impl ContentFetcher for DriveFetcher {
    fn name(&self) -> &str {
        "drive"
    }

    fn validate(&self, source: &str) -> Result<()> {
        extract_file_id(source).map(drop)
    }

    #[instrument(skip(self))]
    async fn fetch(&self, source: &str) -> Result<Vec<u8>> {
        let file_id = extract_file_id(source)?;
        let url = self.download_url(&file_id);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                SheetError::InvalidLink(format!(
                    "download of {source} timed out after {}s",
                    self.timeout_secs
                ))
            } else {
                SheetError::InvalidLink(format!("failed to download {source}: {e}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::InvalidLink(format!(
                "download of {source} failed (HTTP {})",
                status.as_u16()
            )));
        }

        let bytes = response.bytes().await.map_err(|e| {
            SheetError::InvalidLink(format!("failed to read body of {source}: {e}"))
        })?;

        tracing::debug!(file_id = %file_id, bytes = bytes.len(), "downloaded file");
        Ok(bytes.to_vec())
    }
}
