use serde::Serialize;

/// Media type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Live,
    Movie,
    Series,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Live => write!(f, "live"),
            MediaKind::Movie => write!(f, "movie"),
            MediaKind::Series => write!(f, "series"),
        }
    }
}

/// Single categorized playlist entry (channel, movie or episode)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistEntry {
    /// Stream address, the immutable identity of the underlying stream
    pub url: String,
    pub kind: MediaKind,
    /// Trailing numeric segment of the url, 0 if absent
    pub stream_id: u64,
    /// Release year parsed from the name, 0 when undetermined (movies only)
    pub year: u16,
    /// Standalone CAM marker found in the name (movies only)
    pub is_cam: bool,
    /// Lowercased, CAM-stripped title used as the dedup/grouping key
    pub clean_name: String,
    pub display_name: String,
    /// Normalized attribute section with the group label applied
    pub meta: String,
    /// Composed metadata+name line, ready for writing
    pub line: String,
}

/// The four output buckets, each a list of (metadata+name line, url) pairs
#[derive(Debug, Default)]
pub struct SplitPlaylists {
    pub live: Vec<(String, String)>,
    pub movies: Vec<(String, String)>,
    pub series: Vec<(String, String)>,
    pub tvshows: Vec<(String, String)>,
}

/// Run statistics
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistStats {
    /// Entries kept past the language filter
    pub total_items: usize,
    pub live_count: usize,
    pub movie_count: usize,
    pub series_count: usize,
    /// Movie entries folded away by title dedup
    pub movie_duplicates_dropped: usize,
    pub season_group_count: usize,
    /// Episodes routed to the binge-shows bucket
    pub binge_episode_count: usize,
}
