//! Content classification and stream identity extraction
//!
//! Classification is a total function over the locator path and, when the
//! path carries no category segment, filename and title heuristics — every
//! retained entry lands in exactly one of {live, movie, series}. The
//! identity helpers pull the numeric stream id, release year and recording
//! quality out of an entry with parse-or-default semantics: absent or
//! malformed values resolve to a sentinel, never to an error.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::MediaKind;

lazy_static! {
    /// Season/episode marker used as a series hint (S01, E07, s3, e12)
    static ref SEASON_EPISODE_MARKER: Regex = Regex::new(r"(?i)S\d+|E\d+").unwrap();

    /// Trailing numeric segment of a locator, extension optional
    static ref STREAM_ID: Regex = Regex::new(r"/(\d+)(?:\.\w+)?$").unwrap();

    /// Four-digit release year, 19xx or 20xx
    static ref YEAR: Regex = Regex::new(r"\b(?:19|20)\d{2}\b").unwrap();

    /// Standalone low-quality recording marker, bare or parenthesized
    static ref CAM_MARKER: Regex = Regex::new(r"(?i)\bCAM\b|\(CAM\)").unwrap();

    /// Leading show title followed by a season marker
    static ref SEASON_KEY: Regex = Regex::new(r"(?i)^(.*?)\s*S(\d+)").unwrap();
}

/// Default season token for entries with no season marker
pub const DEFAULT_SEASON: &str = "00";

/// Assign a category. First match wins; movie is the fallback.
pub fn classify(url: &str, extinf: &str) -> MediaKind {
    if url.contains("/live/") {
        return MediaKind::Live;
    }
    if url.contains("/movie/") {
        return MediaKind::Movie;
    }
    if url.contains("/series/") {
        return MediaKind::Series;
    }

    // No category segment in the path: fall back to heuristics
    if url.ends_with(".ts") {
        MediaKind::Live
    } else if SEASON_EPISODE_MARKER.is_match(extinf) {
        MediaKind::Series
    } else {
        MediaKind::Movie
    }
}

/// Numeric stream identifier from the locator's final path segment, 0 if absent
pub fn stream_id_from_url(url: &str) -> u64 {
    STREAM_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Last plausible release year in the name, 0 if none
pub fn year_from_name(name: &str) -> u16 {
    YEAR.find_iter(name)
        .last()
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Whether the name carries a standalone CAM marker
pub fn is_cam_name(name: &str) -> bool {
    CAM_MARKER.is_match(name)
}

/// Deduplication key: CAM markers stripped, lowercased, trimmed
pub fn dedup_key(name: &str) -> String {
    CAM_MARKER
        .replace_all(name, "")
        .to_lowercase()
        .trim()
        .to_string()
}

/// Grouping key `(show, season)` for a series entry. Entries without a
/// season marker fall into the default season of their full name.
pub fn season_key(name: &str) -> (String, String) {
    match SEASON_KEY.captures(name) {
        Some(caps) => (caps[1].to_lowercase(), caps[2].to_string()),
        None => (name.to_lowercase(), DEFAULT_SEASON.to_string()),
    }
}
