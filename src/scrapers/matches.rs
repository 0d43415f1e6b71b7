use crate::api::HtmlFetcher;
use crate::config::{BucketLimits, ScraperConfig};
use crate::models::{Match, MatchBuckets, MatchStatus};
use crate::scrapers::html::{self, Anchor};
use crate::scrapers::{scores, CricketScraper};
use crate::utils::status::StatusClassifier;
use crate::utils::teams::TeamNameResolver;
use futures::future::join_all;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Every match link on the series page points into this path
pub const SCORE_LINK_MARKER: &str = "/live-cricket-scores/";

// "Team1 vs Team2, <descriptor> - <status>"
static MATCH_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)\s+vs\s+(.+?),\s*(.+?)\s+-\s+(.+)$").expect("valid match title pattern")
});

// "X1", "Y2": a fixture slot not yet filled by a real team
static SEED_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]\d$").expect("valid seed placeholder pattern"));

// trailing "(X1 v X4)"
static SEEDING_NOTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*\(\s*[A-Z]\d\s+vs?\s+[A-Z]\d\s*\)\s*$").expect("valid seeding note pattern")
});

/// Decoder output: the buckets, plus the scoreboard href of each live
/// match (`score_pages[i]` belongs to `matches.live[i]`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedMatches {
    pub matches: MatchBuckets,
    pub score_pages: Vec<String>,
}

pub struct MatchListDecoder<'a> {
    series_slug: &'a str,
    series_title: &'a str,
    limits: BucketLimits,
    teams: &'a TeamNameResolver,
    classifier: &'a StatusClassifier,
}

impl<'a> MatchListDecoder<'a> {
    pub fn new(
        config: &'a ScraperConfig,
        teams: &'a TeamNameResolver,
        classifier: &'a StatusClassifier,
    ) -> Self {
        Self {
            series_slug: &config.series_slug,
            series_title: &config.series_title,
            limits: config.limits,
            teams,
            classifier,
        }
    }

    fn in_series(&self, anchor: &Anchor) -> bool {
        anchor.href.contains(self.series_slug)
            || anchor.title.to_lowercase().contains(self.series_title)
    }

    /// Turn one link into a match, or `None` if its title isn't a fixture
    pub fn parse_anchor(&self, index: usize, anchor: &Anchor) -> Option<Match> {
        let caps = MATCH_TITLE.captures(&anchor.title)?;
        let (team1, team2) = (caps[1].trim(), caps[2].trim());

        if SEED_PLACEHOLDER.is_match(team1) || SEED_PLACEHOLDER.is_match(team2) {
            debug!(title = %anchor.title, "skipping unseeded fixture");
            return None;
        }

        let phrase = caps[4].trim();
        let status = self.classifier.classify(phrase);

        Some(Match {
            id: format!("match-{}", index),
            team1: self.teams.resolve(team1).to_string(),
            team2: self.teams.resolve(team2).to_string(),
            team1_score: None,
            team2_score: None,
            result: (status == MatchStatus::Completed).then(|| phrase.to_string()),
            venue: SEEDING_NOTE.replace(caps[3].trim(), "").into_owned(),
            time: String::new(),
            status,
        })
    }

    /// Dedup by href, filter to the tracked series, parse, and bucket by
    /// status. Each bucket keeps the first matches in page order up to its
    /// limit.
    pub fn decode(&self, anchors: &[Anchor]) -> DecodedMatches {
        let mut seen = HashSet::new();
        let mut decoded = DecodedMatches::default();

        for (index, anchor) in anchors.iter().enumerate() {
            if !seen.insert(anchor.href.as_str()) {
                continue;
            }
            if !self.in_series(anchor) {
                debug!(href = %anchor.href, "skipping link outside the series");
                continue;
            }
            let Some(m) = self.parse_anchor(index, anchor) else {
                continue;
            };

            let buckets = &mut decoded.matches;
            let (bucket, limit) = match m.status {
                MatchStatus::Completed => (&mut buckets.recent, self.limits.recent),
                MatchStatus::Live => (&mut buckets.live, self.limits.live),
                MatchStatus::Upcoming => (&mut buckets.upcoming, self.limits.upcoming),
            };
            if bucket.len() >= limit {
                debug!(id = %m.id, status = m.status.as_str(), "bucket full");
                continue;
            }

            if m.status == MatchStatus::Live {
                decoded.score_pages.push(anchor.href.clone());
            }
            bucket.push(m);
        }

        decoded
    }
}

impl<F: HtmlFetcher> CricketScraper<F> {
    /// Scrape the series match list and fill in scores for live matches.
    /// `None` only when the match list itself can't be fetched or read.
    pub async fn fetch_matches(&self) -> Option<MatchBuckets> {
        let url = self.config.matches_url();

        let page = match self.fetcher.fetch(&url, self.config.listing_timeout()).await {
            Ok(page) => page,
            Err(e) => {
                warn!(url = %url, error = %e, "failed to fetch matches");
                return None;
            }
        };

        let anchors = match html::select_anchors(&page, SCORE_LINK_MARKER) {
            Ok(anchors) => anchors,
            Err(e) => {
                warn!(url = %url, error = %e, "failed to read match links");
                return None;
            }
        };

        let DecodedMatches {
            mut matches,
            score_pages,
        } = MatchListDecoder::new(&self.config, &self.teams, &self.classifier).decode(&anchors);

        self.attach_live_scores(&mut matches.live, &score_pages).await;

        info!(
            live = matches.live.len(),
            recent = matches.recent.len(),
            upcoming = matches.upcoming.len(),
            "decoded matches"
        );
        Some(matches)
    }

    /// Fetch every live scoreboard at once. Each task writes only its own
    /// match, and a failed fetch just leaves that match without scores.
    async fn attach_live_scores(&self, live: &mut [Match], score_pages: &[String]) {
        let tasks = live
            .iter_mut()
            .zip(score_pages)
            .map(|(m, href)| async move {
                let entries = self.fetch_match_score(href).await;
                scores::attribute(m, entries.as_deref(), &self.teams);
            });

        join_all(tasks).await;
    }
}
