//! Playlist splitting pipeline
//!
//! Scans the raw playlist text, pairs each `#EXTINF` metadata line with the
//! locator on the following line, keeps only target-language entries, and
//! runs every kept pair through classification, normalization and identity
//! extraction into a single categorized record. Live records land in their
//! bucket immediately; movie and series records are accumulated and handed
//! to the resolver for deduplication and season routing once the whole
//! playlist has been scanned.

use crate::models::{MediaKind, PlaylistEntry, PlaylistStats, SplitPlaylists};
use crate::services::{classifier, cleaner, resolver};

/// Metadata tokens accepted by the language filter. The second spelling is
/// a recurring upstream typo.
const LANGUAGE_TOKENS: [&str; 2] = ["telugu", "teulugu"];

fn matches_language(extinf: &str) -> bool {
    let lower = extinf.to_lowercase();
    LANGUAGE_TOKENS.iter().any(|token| lower.contains(token))
}

fn group_label(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Live => "Live",
        MediaKind::Movie => "Movies",
        MediaKind::Series => "Web Series",
    }
}

/// Split the playlist text into the four output buckets
pub fn split_playlist(
    content: &str,
    binge_episode_threshold: usize,
) -> (SplitPlaylists, PlaylistStats) {
    let lines: Vec<&str> = content.lines().collect();

    let mut stats = PlaylistStats::default();
    let mut playlists = SplitPlaylists::default();
    let mut movie_items: Vec<PlaylistEntry> = Vec::new();
    let mut season_grouping = resolver::SeasonGroups::new();

    for (i, &line) in lines.iter().enumerate() {
        if !line.starts_with("#EXTINF") {
            continue;
        }
        if !matches_language(line) {
            continue;
        }

        // The locator is the following line; entries without one are malformed
        let Some(url) = lines.get(i + 1).map(|next| next.trim()) else {
            continue;
        };
        if url.is_empty() {
            continue;
        }

        let kind = classifier::classify(url, line);

        let meta_line = cleaner::strip_stale_attributes(line);
        let Some((meta, raw_name)) = meta_line.rsplit_once(',') else {
            continue;
        };

        let meta = cleaner::normalize_attributes(meta);
        let display_name = cleaner::clean_name(raw_name, kind);
        if display_name.is_empty() {
            continue;
        }

        let stream_id = classifier::stream_id_from_url(url);
        let (year, is_cam) = if kind == MediaKind::Movie {
            (
                classifier::year_from_name(&display_name),
                classifier::is_cam_name(&display_name),
            )
        } else {
            (0, false)
        };

        let meta = cleaner::set_group_title(&meta, group_label(kind));
        let entry = PlaylistEntry {
            url: url.to_string(),
            kind,
            stream_id,
            year,
            is_cam,
            clean_name: classifier::dedup_key(&display_name),
            line: format!("{meta},{display_name}"),
            display_name,
            meta,
        };

        stats.total_items += 1;
        match entry.kind {
            MediaKind::Live => {
                stats.live_count += 1;
                playlists.live.push((entry.line, entry.url));
            }
            MediaKind::Movie => {
                stats.movie_count += 1;
                movie_items.push(entry);
            }
            MediaKind::Series => {
                stats.series_count += 1;
                season_grouping
                    .entry(classifier::season_key(&entry.display_name))
                    .or_default()
                    .push(entry);
            }
        }
    }

    tracing::info!(
        "Scanned {} lines: {} entries kept ({} live, {} movies, {} episodes)",
        lines.len(),
        stats.total_items,
        stats.live_count,
        stats.movie_count,
        stats.series_count
    );

    let (movies, duplicates_dropped) = resolver::resolve_movies(movie_items);
    stats.movie_duplicates_dropped = duplicates_dropped;
    playlists.movies = movies;

    stats.season_group_count = season_grouping.len();
    let (series, tvshows) = resolver::route_seasons(season_grouping, binge_episode_threshold);
    stats.binge_episode_count = tvshows.len();
    playlists.series = series;
    playlists.tvshows = tvshows;

    (playlists, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::cleaner::DEFAULT_LOGO;
    use crate::services::resolver::BINGE_EPISODE_THRESHOLD;

    fn split(content: &str) -> (SplitPlaylists, PlaylistStats) {
        split_playlist(content, BINGE_EPISODE_THRESHOLD)
    }

    #[test]
    fn test_live_entry_end_to_end() {
        let content = "\
#EXTM3U
#EXTINF:-1 tvg-logo=\"\" group-title=\"Old\",Telugu: Channel One (FHD)
http://host/live/1/1001.ts
";
        let (playlists, stats) = split(content);

        assert_eq!(stats.total_items, 1);
        assert_eq!(playlists.live.len(), 1);
        let (line, url) = &playlists.live[0];
        assert_eq!(url, "http://host/live/1/1001.ts");
        assert_eq!(
            line,
            &format!(
                r#"#EXTINF:-1 tvg-logo="{DEFAULT_LOGO}" group-title="RJM | Live",Channel One"#
            )
        );
    }

    #[test]
    fn test_language_filter_drops_other_languages() {
        let content = "\
#EXTINF:-1 tvg-logo=\"x\",Hindi: Channel Two
http://host/live/1/1002.ts
#EXTINF:-1 tvg-logo=\"x\",TEULUGU: Channel Three
http://host/live/1/1003.ts
";
        let (playlists, stats) = split(content);
        assert_eq!(stats.total_items, 1);
        assert!(playlists.live[0].0.contains("Channel Three"));
    }

    #[test]
    fn test_metadata_line_without_locator_is_dropped() {
        let content = "#EXTINF:-1 tvg-logo=\"x\",Telugu: Channel One";
        let (playlists, stats) = split(content);
        assert_eq!(stats.total_items, 0);
        assert!(playlists.live.is_empty());
    }

    #[test]
    fn test_metadata_line_without_comma_is_dropped() {
        let content = "\
#EXTINF:-1 telugu
http://host/live/1/1001.ts
";
        let (_, stats) = split(content);
        assert_eq!(stats.total_items, 0);
    }

    #[test]
    fn test_movie_dedup_prefers_non_cam_copy() {
        let content = "\
#EXTINF:-1 tvg-logo=\"x\",Telugu: Hero (2020)
http://host/movie/50.mp4
#EXTINF:-1 tvg-logo=\"x\",Telugu: Hero (2020) (CAM)
http://host/movie/90.mp4
";
        let (playlists, stats) = split(content);

        assert_eq!(stats.movie_count, 2);
        assert_eq!(stats.movie_duplicates_dropped, 1);
        assert_eq!(playlists.movies.len(), 1);
        let (line, url) = &playlists.movies[0];
        assert_eq!(url, "http://host/movie/50.mp4");
        assert!(line.ends_with(",Hero (2020)"));
        assert!(line.contains(r#"group-title="RJM | Movies""#));
    }

    #[test]
    fn test_movie_output_has_unique_clean_keys() {
        let content = "\
#EXTINF:-1 tvg-logo=\"x\",Telugu: Hero (2020)
http://host/movie/50.mp4
#EXTINF:-1 tvg-logo=\"x\",Telugu: hero (2020)
http://host/movie/51.mp4
#EXTINF:-1 tvg-logo=\"x\",Telugu: Villain (2021)
http://host/movie/60.mp4
";
        let (playlists, _) = split(content);
        assert_eq!(playlists.movies.len(), 2);
    }

    #[test]
    fn test_binge_season_routed_whole() {
        let mut content = String::new();
        for i in 0..26 {
            content.push_str(&format!(
                "#EXTINF:-1 tvg-logo=\"x\",Telugu: Mystery Show S1 E{:02}\nhttp://host/series/{}.mkv\n",
                i + 1,
                2000 + i
            ));
        }
        let (playlists, stats) = split(&content);

        assert_eq!(stats.series_count, 26);
        assert_eq!(stats.season_group_count, 1);
        assert_eq!(stats.binge_episode_count, 26);
        assert!(playlists.series.is_empty());
        assert_eq!(playlists.tvshows.len(), 26);
        for (line, _) in &playlists.tvshows {
            assert!(line.contains(r#"group-title="RJM | TV Shows""#));
        }
    }

    #[test]
    fn test_short_season_stays_in_series_bucket() {
        let mut content = String::new();
        for i in 0..24 {
            content.push_str(&format!(
                "#EXTINF:-1 tvg-logo=\"x\",Telugu: Mini Show S2 E{:02}\nhttp://host/series/{}.mkv\n",
                i + 1,
                3000 + i
            ));
        }
        let (playlists, _) = split(&content);

        assert_eq!(playlists.series.len(), 24);
        assert!(playlists.tvshows.is_empty());
        for (line, _) in &playlists.series {
            assert!(line.contains(r#"group-title="RJM | Web Series""#));
        }
    }

    #[test]
    fn test_seasons_split_independently() {
        // One binge-sized season and one short season of the same show
        let mut content = String::new();
        for i in 0..25 {
            content.push_str(&format!(
                "#EXTINF:-1 tvg-logo=\"x\",Telugu: Long Show S1 E{:02}\nhttp://host/series/{}.mkv\n",
                i + 1,
                4000 + i
            ));
        }
        for i in 0..3 {
            content.push_str(&format!(
                "#EXTINF:-1 tvg-logo=\"x\",Telugu: Long Show S2 E{:02}\nhttp://host/series/{}.mkv\n",
                i + 1,
                5000 + i
            ));
        }
        let (playlists, stats) = split(&content);

        assert_eq!(stats.season_group_count, 2);
        assert_eq!(playlists.tvshows.len(), 25);
        assert_eq!(playlists.series.len(), 3);
    }

    #[test]
    fn test_series_without_season_marker_uses_default_season() {
        let content = "\
#EXTINF:-1 tvg-logo=\"x\",Telugu: Special Episode E1
http://host/series/7001.mkv
";
        let (playlists, stats) = split(content);
        assert_eq!(stats.series_count, 1);
        assert_eq!(playlists.series.len(), 1);
    }

    #[test]
    fn test_every_kept_entry_is_classified() {
        let content = "\
#EXTINF:-1 tvg-logo=\"x\",Telugu: Channel A
http://host/live/1/1.ts
#EXTINF:-1 tvg-logo=\"x\",Telugu: Film B
http://host/movie/2.mp4
#EXTINF:-1 tvg-logo=\"x\",Telugu: Show C S1 E1
http://host/series/3.mkv
#EXTINF:-1 tvg-logo=\"x\",Telugu: Oddball D
http://host/other/4.mp4
";
        let (playlists, stats) = split(content);

        let placed = playlists.live.len()
            + playlists.movies.len()
            + playlists.series.len()
            + playlists.tvshows.len();
        assert_eq!(stats.total_items, 4);
        assert_eq!(placed, 4);
    }
}
