mod config;
mod models;
mod services;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::fetcher::PlaylistFetcher;
use crate::services::{splitter, writer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rjm_playlist=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();

    tracing::info!("Starting RJM playlist splitter v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Provider host: {}", config.host_url);
    tracing::info!("Output directory: {}", config.output_dir);

    let fetcher = PlaylistFetcher::new(&config)?;

    // The fetch is all-or-nothing: on failure nothing is written
    let content = match fetcher.fetch(&config.playlist_url()).await {
        Ok(content) => content,
        Err(err) => {
            tracing::error!("Error downloading playlist: {err:#}");
            return Err(err);
        }
    };
    tracing::info!("Downloaded playlist: {:.2} MB", content.len() as f64 / 1024.0 / 1024.0);

    let (playlists, stats) = splitter::split_playlist(&content, config.binge_episode_threshold);

    writer::save_all(&config.output_dir, &playlists).await?;

    tracing::info!("Run summary: {}", serde_json::to_string(&stats)?);

    Ok(())
}
