pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod scrapers;
pub mod utils;

pub use api::*;
pub use config::ScraperConfig;
pub use error::ScrapeError;
pub use models::*;
pub use scrapers::CricketScraper;
pub use utils::*;

use serde::{Deserialize, Serialize};

/// Result of one pass over both operations. `None` means that operation
/// came back empty-handed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentSnapshot {
    pub standings: Option<Vec<GroupStandings>>,
    pub matches: Option<MatchBuckets>,
}

/// Scrape standings and matches concurrently
pub async fn fetch_snapshot<F: HtmlFetcher>(scraper: &CricketScraper<F>) -> TournamentSnapshot {
    let (standings, matches) = tokio::join!(scraper.fetch_standings(), scraper.fetch_matches());
    TournamentSnapshot { standings, matches }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fetch::testing::StaticFetcher;

    #[tokio::test]
    async fn test_operations_fail_independently() {
        let config = ScraperConfig::default();
        let fetcher = StaticFetcher::new().page(
            config.standings_url(),
            r#"<div class="point-table-grid">Group A</div>
               <div class="point-table-grid">1IND 32102+1.200</div>"#,
        );
        let scraper = CricketScraper::new(fetcher, config);

        let snapshot = fetch_snapshot(&scraper).await;
        assert_eq!(snapshot.standings.map(|g| g.len()), Some(1));
        assert_eq!(snapshot.matches, None);
    }
}
