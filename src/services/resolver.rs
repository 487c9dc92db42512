//! Movie deduplication and season routing
//!
//! Both operations are batch: they need the full entry set for their
//! category before they can run, so the splitter hands them accumulated
//! records rather than a stream.

use std::collections::HashMap;

use crate::models::PlaylistEntry;
use crate::services::cleaner;

/// Episode count at or above which a season is treated as a complete
/// catalogued show and routed to the binge-shows bucket
pub const BINGE_EPISODE_THRESHOLD: usize = 25;

/// Season groups keyed by (show, season token)
pub type SeasonGroups = HashMap<(String, String), Vec<PlaylistEntry>>;

/// Deduplicate movies by clean name. Candidates are ranked by
/// `(year, stream_id)` descending; the first record seen for a key wins
/// unless a later non-CAM record can displace a kept CAM one. Output keeps
/// first-seen order. Returns the kept (line, url) pairs and the number of
/// duplicates folded away.
pub fn resolve_movies(mut movies: Vec<PlaylistEntry>) -> (Vec<(String, String)>, usize) {
    let total = movies.len();
    movies.sort_by(|a, b| (b.year, b.stream_id).cmp(&(a.year, a.stream_id)));

    let mut order: Vec<String> = Vec::new();
    let mut kept: HashMap<String, PlaylistEntry> = HashMap::new();

    for movie in movies {
        match kept.get(&movie.clean_name) {
            None => {
                order.push(movie.clean_name.clone());
                kept.insert(movie.clean_name.clone(), movie);
            }
            // A proper copy displaces a CAM copy, regardless of rank
            Some(current) if current.is_cam && !movie.is_cam => {
                kept.insert(movie.clean_name.clone(), movie);
            }
            Some(_) => {}
        }
    }

    let resolved: Vec<(String, String)> = order
        .into_iter()
        .filter_map(|key| kept.remove(&key))
        .map(|movie| (movie.line, movie.url))
        .collect();

    let dropped = total - resolved.len();
    (resolved, dropped)
}

/// Order every season group by stream id descending and route it whole:
/// groups reaching `threshold` episodes go to the binge-shows bucket with
/// their group label rewritten, smaller groups go to the series bucket
/// unchanged.
pub fn route_seasons(
    groups: SeasonGroups,
    threshold: usize,
) -> (Vec<(String, String)>, Vec<(String, String)>) {
    let mut series: Vec<(String, String)> = Vec::new();
    let mut tvshows: Vec<(String, String)> = Vec::new();

    for ((show, season), mut episodes) in groups {
        episodes.sort_by(|a, b| b.stream_id.cmp(&a.stream_id));

        if episodes.len() >= threshold {
            tracing::debug!(
                "Routing {} S{} to binge shows ({} episodes)",
                show,
                season,
                episodes.len()
            );
            for episode in episodes {
                let meta = cleaner::set_group_title(&episode.meta, "TV Shows");
                tvshows.push((
                    format!("{},{}", meta, episode.display_name),
                    episode.url,
                ));
            }
        } else {
            series.extend(episodes.into_iter().map(|e| (e.line, e.url)));
        }
    }

    (series, tvshows)
}
