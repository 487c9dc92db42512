//! M3U output documents
//!
//! Serializes each output bucket to its fixed-named file under the output
//! directory. Every document opens with the network's branded header block
//! and a generation timestamp in IST. An empty bucket produces no file at
//! all; the caller gets a "no data" log line instead of an empty document.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{FixedOffset, Utc};
use tokio::fs;

use crate::models::SplitPlaylists;

const FILE_LIVE: &str = "Live.m3u";
const FILE_MOVIES: &str = "Movies.m3u";
const FILE_SERIES: &str = "Web Series.m3u";
const FILE_TVSHOWS: &str = "TV Shows.m3u";

/// Generation timestamp at UTC+5:30
fn ist_timestamp() -> String {
    let ist = FixedOffset::east_opt(5 * 3600 + 30 * 60).expect("fixed IST offset");
    Utc::now()
        .with_timezone(&ist)
        .format("%Y-%m-%d %H:%M:%S IST")
        .to_string()
}

fn render_document(items: &[(String, String)]) -> String {
    let mut content = vec![
        r#"#EXTM3U billed-msg="RJM Tv - RJMBTS Network""#.to_string(),
        "# RJMS - RJMBTS Network".to_string(),
        "# Scripted & Updated by Kittujk".to_string(),
        format!("# Last Updated: {}", ist_timestamp()),
        "#EXTM3U".to_string(),
    ];

    for (info, url) in items {
        content.push(info.clone());
        content.push(url.clone());
    }

    content.join("\n")
}

/// Write one bucket. Returns whether a file was produced.
pub async fn save_playlist(path: &Path, items: &[(String, String)]) -> Result<bool> {
    if items.is_empty() {
        tracing::info!("No data for {}", path.display());
        return Ok(false);
    }

    fs::write(path, render_document(items))
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Saved {}: {} items", path.display(), items.len());
    Ok(true)
}

/// Write all four buckets under the output directory, creating it if needed
pub async fn save_all(output_dir: &str, playlists: &SplitPlaylists) -> Result<()> {
    fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("Failed to create output directory {output_dir}"))?;

    let dir = Path::new(output_dir);
    save_playlist(&dir.join(FILE_LIVE), &playlists.live).await?;
    save_playlist(&dir.join(FILE_MOVIES), &playlists.movies).await?;
    save_playlist(&dir.join(FILE_SERIES), &playlists.series).await?;
    save_playlist(&dir.join(FILE_TVSHOWS), &playlists.tvshows).await?;

    Ok(())
}
