//! Playlist retrieval
//!
//! One-shot fetch of the provider playlist as a single text blob. The fetch
//! is the run's only blocking precondition: any failure here is fatal and
//! the pipeline never executes. No retries.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::Client;

use crate::config::Config;

pub struct PlaylistFetcher {
    client: Client,
    max_m3u_size_mb: usize,
}

impl PlaylistFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_millis(config.fetch_timeout_ms))
            .gzip(true)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            max_m3u_size_mb: config.max_m3u_size_mb,
        })
    }

    /// Download the playlist body. Non-success status and oversize
    /// payloads are errors.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to fetch playlist")?;

        let status = response.status();
        if !status.is_success() {
            bail!(
                "Playlist request failed: HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Error")
            );
        }

        if let Some(len) = response.content_length() {
            let max_bytes = (self.max_m3u_size_mb as u64) * 1024 * 1024;
            if len > max_bytes {
                bail!(
                    "Playlist too large: {:.1}MB (limit {}MB)",
                    len as f64 / 1024.0 / 1024.0,
                    self.max_m3u_size_mb
                );
            }
        }

        response
            .text()
            .await
            .context("Failed to read playlist body")
    }
}
