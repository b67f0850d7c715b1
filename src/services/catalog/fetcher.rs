use anyhow::{anyhow, Context, Result};
use reqwest::{Client, StatusCode};
use std::path::Path;
use std::time::Duration;

use crate::models::lecture::Lecture;
use crate::models::settings::CatalogSource;

/// Reads one catalog partition from a URL or a local file.
pub struct CatalogFetcher {
    client: Client,
    max_response_bytes: usize,
}

impl CatalogFetcher {
    pub fn new(max_response_bytes: usize) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .context("Failed to build catalog HTTP client")?;

        Ok(Self {
            client,
            max_response_bytes,
        })
    }

    pub async fn fetch(&self, source: &CatalogSource) -> Result<Vec<Lecture>> {
        let bytes = match source {
            CatalogSource::Url(url) => self.fetch_url(url).await?,
            CatalogSource::File(path) => self.read_file(path).await?,
        };

        serde_json::from_slice(&bytes).context("Catalog is not a JSON array of lectures")
    }

    async fn fetch_url(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Network error fetching {}", url))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(anyhow!("Catalog fetch from {} failed with HTTP status {}", url, status));
        }

        if let Some(content_length) = response.content_length() {
            self.check_size(content_length as usize)?;
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read catalog response body")?;
        self.check_size(bytes.len())?;

        Ok(bytes.to_vec())
    }

    async fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read catalog from {}", path.display()))?;
        self.check_size(bytes.len())?;
        Ok(bytes)
    }

    fn check_size(&self, len: usize) -> Result<()> {
        if len > self.max_response_bytes {
            return Err(anyhow!(
                "Catalog too large ({} bytes > {} bytes)",
                len,
                self.max_response_bytes
            ));
        }
        Ok(())
    }
}
