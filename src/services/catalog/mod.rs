//! Lecture catalog loading.
//!
//! The catalog comes in two partitions (majors and liberal arts). Both are
//! requested together and the catalog exists only once both have arrived,
//! majors first.

mod fetcher;

pub use fetcher::CatalogFetcher;

use anyhow::{Context, Result};

use crate::models::lecture::Catalog;
use crate::models::settings::CatalogConfig;

pub struct CatalogLoader {
    fetcher: CatalogFetcher,
    config: CatalogConfig,
}

impl CatalogLoader {
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let fetcher = CatalogFetcher::new(config.max_response_bytes)?;
        Ok(Self { fetcher, config })
    }

    /// Fetch both partitions concurrently. Either failure fails the load.
    pub async fn load(&self) -> Result<Catalog> {
        let (majors, liberal_arts) = tokio::try_join!(
            async {
                self.fetcher
                    .fetch(&self.config.majors)
                    .await
                    .context("Failed to load majors catalog")
            },
            async {
                self.fetcher
                    .fetch(&self.config.liberal_arts)
                    .await
                    .context("Failed to load liberal arts catalog")
            },
        )?;

        log::info!(
            "Loaded catalog: {} majors lectures, {} liberal arts lectures",
            majors.len(),
            liberal_arts.len()
        );
        Ok(Catalog::from_partitions(vec![majors, liberal_arts]))
    }
}
