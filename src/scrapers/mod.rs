pub mod html;
pub mod matches;
pub mod scores;
pub mod standings;

use crate::api::{HtmlFetcher, ReqwestFetcher};
use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::utils::status::StatusClassifier;
use crate::utils::teams::TeamNameResolver;

/// Entry point for both scrape operations. Holds no state between calls,
/// so it can be shared and polled freely.
pub struct CricketScraper<F> {
    fetcher: F,
    config: ScraperConfig,
    teams: TeamNameResolver,
    classifier: StatusClassifier,
}

impl<F: HtmlFetcher> CricketScraper<F> {
    pub fn new(fetcher: F, config: ScraperConfig) -> Self {
        let classifier = StatusClassifier::new(config.score_line_is_live);
        Self {
            fetcher,
            config,
            teams: TeamNameResolver::default(),
            classifier,
        }
    }

    /// Replace the built-in team code table
    pub fn with_teams(mut self, teams: TeamNameResolver) -> Self {
        self.teams = teams;
        self
    }

    pub fn with_classifier(mut self, classifier: StatusClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }
}

impl CricketScraper<ReqwestFetcher> {
    pub fn from_config(config: ScraperConfig) -> Result<Self, ScrapeError> {
        Ok(Self::new(ReqwestFetcher::new()?, config))
    }
}
