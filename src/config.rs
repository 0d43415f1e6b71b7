use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://www.cricbuzz.com";
const DEFAULT_SERIES_ID: &str = "11253";
const DEFAULT_SERIES_SLUG: &str = "icc-mens-t20-world-cup-2026";
const DEFAULT_SERIES_TITLE: &str = "t20 world cup 2026";

/// Maximum number of matches kept per status bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketLimits {
    pub recent: usize,
    pub live: usize,
    pub upcoming: usize,
}

impl Default for BucketLimits {
    fn default() -> Self {
        Self {
            recent: 3,
            live: 5,
            upcoming: 6,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    pub base_url: String,
    pub series_id: String,
    pub series_slug: String,
    /// Lowercase tournament name looked for in anchor titles
    pub series_title: String,
    pub listing_timeout_ms: u64,
    pub score_timeout_ms: u64,
    pub limits: BucketLimits,
    /// Treat a bare score line ("NZ 159/7 (20 Ovs)") as a live status
    pub score_line_is_live: bool,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            series_id: DEFAULT_SERIES_ID.to_string(),
            series_slug: DEFAULT_SERIES_SLUG.to_string(),
            series_title: DEFAULT_SERIES_TITLE.to_string(),
            listing_timeout_ms: 15_000,
            score_timeout_ms: 10_000,
            limits: BucketLimits::default(),
            score_line_is_live: true,
        }
    }
}

impl ScraperConfig {
    /// Load overrides from `.env` and the process environment
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("CRICKET_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Ok(series_id) = std::env::var("CRICKET_SERIES_ID") {
            config.series_id = series_id;
        }
        if let Ok(series_slug) = std::env::var("CRICKET_SERIES_SLUG") {
            config.series_slug = series_slug;
        }
        if let Ok(series_title) = std::env::var("CRICKET_SERIES_TITLE") {
            config.series_title = series_title.to_lowercase();
        }
        if let Ok(ms) = std::env::var("CRICKET_LISTING_TIMEOUT_MS") {
            config.listing_timeout_ms = ms
                .parse()
                .context("CRICKET_LISTING_TIMEOUT_MS must be a number of milliseconds")?;
        }
        if let Ok(ms) = std::env::var("CRICKET_SCORE_TIMEOUT_MS") {
            config.score_timeout_ms = ms
                .parse()
                .context("CRICKET_SCORE_TIMEOUT_MS must be a number of milliseconds")?;
        }
        if let Ok(flag) = std::env::var("CRICKET_SCORE_LINE_LIVE") {
            config.score_line_is_live = flag != "0" && !flag.eq_ignore_ascii_case("false");
        }

        Ok(config)
    }

    fn series_url(&self) -> String {
        format!(
            "{}/cricket-series/{}/{}",
            self.base_url, self.series_id, self.series_slug
        )
    }

    /// Build points table URL
    pub fn standings_url(&self) -> String {
        format!("{}/points-table", self.series_url())
    }

    /// Build series match list URL
    pub fn matches_url(&self) -> String {
        format!("{}/matches", self.series_url())
    }

    /// Build a scoreboard URL from a match list href
    pub fn score_url(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") {
            href.to_string()
        } else {
            format!("{}{}", self.base_url, href)
        }
    }

    pub fn listing_timeout(&self) -> Duration {
        Duration::from_millis(self.listing_timeout_ms)
    }

    pub fn score_timeout(&self) -> Duration {
        Duration::from_millis(self.score_timeout_ms)
    }
}
