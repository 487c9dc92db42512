use std::env;

use crate::services::resolver::BINGE_EPISODE_THRESHOLD;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Provider
    pub host_url: String,
    pub username: String,
    pub password: String,

    // Fetch
    pub fetch_timeout_ms: u64,
    pub max_m3u_size_mb: usize,
    pub user_agent: String,

    // Output
    pub output_dir: String,

    // Series routing
    pub binge_episode_threshold: usize,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            // Provider
            host_url: env::var("IPTV_HOST").unwrap_or_else(|_| "https://webhop.live".to_string()),
            username: env::var("IPTV_USER").unwrap_or_else(|_| "juno123".to_string()),
            password: env::var("IPTV_PASS").unwrap_or_else(|_| "juno123".to_string()),

            // Fetch
            fetch_timeout_ms: env::var("FETCH_TIMEOUT_MS")
                .unwrap_or_else(|_| "30000".to_string())
                .parse()
                .unwrap_or(30_000), // 30 seconds

            max_m3u_size_mb: env::var("MAX_M3U_SIZE_MB")
                .unwrap_or_else(|_| "500".to_string())
                .parse()
                .unwrap_or(500),

            // Misc - Use VLC user agent to avoid IPTV server blocks
            user_agent: env::var("USER_AGENT")
                .unwrap_or_else(|_| "VLC/3.0.20 LibVLC/3.0.20".to_string()),

            // Output
            output_dir: env::var("OUTPUT_DIR").unwrap_or_else(|_| "Queen".to_string()),

            // Series routing
            binge_episode_threshold: env::var("BINGE_EPISODE_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(BINGE_EPISODE_THRESHOLD),
        }
    }

    /// Full playlist address requesting the extended m3u format
    pub fn playlist_url(&self) -> String {
        format!(
            "{}/get.php?username={}&password={}&type=m3u_plus&output=ts",
            self.host_url.trim_end_matches('/'),
            urlencoding::encode(&self.username),
            urlencoding::encode(&self.password)
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
