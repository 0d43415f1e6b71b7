use crate::api::HtmlFetcher;
use crate::models::{Match, ScoreEntry};
use crate::scrapers::{html, CricketScraper};
use crate::utils::teams::TeamNameResolver;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::{debug, warn};

// "IND118-7(16.4)", "AUS152/6(20)"
static TEAM_SCORE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z]{2,4})\s*(\d+)\s*[-/]\s*(\d+)\s*\(\s*(\d+(?:\.\d)?)\s*\)")
        .expect("valid team score pattern")
});

/// Pull (team code, "runs/wickets (overs)") pairs out of scoreboard text
/// blocks, in page order, without repeats. `None` when nothing matched.
pub fn extract<S: AsRef<str>>(blocks: &[S]) -> Option<Vec<ScoreEntry>> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for block in blocks {
        let Some(caps) = TEAM_SCORE.captures(block.as_ref()) else {
            continue;
        };

        let entry = ScoreEntry {
            team: caps[1].to_string(),
            score: format!("{}/{} ({})", &caps[2], &caps[3], &caps[4]),
        };
        if seen.insert(entry.clone()) {
            entries.push(entry);
        }
    }

    if entries.is_empty() {
        None
    } else {
        Some(entries)
    }
}

/// Set `team1_score`/`team2_score` by matching each entry's team name
/// against the match's teams. Scoreboards often list the chasing side
/// first, so page position says nothing about which slot a score fills.
pub fn attribute(m: &mut Match, entries: Option<&[ScoreEntry]>, teams: &TeamNameResolver) {
    let Some(entries) = entries else {
        return;
    };

    for entry in entries {
        if teams.same_team(&entry.team, &m.team1) {
            m.team1_score.get_or_insert_with(|| entry.score.clone());
        } else if teams.same_team(&entry.team, &m.team2) {
            m.team2_score.get_or_insert_with(|| entry.score.clone());
        } else {
            debug!(
                team = %entry.team,
                match_id = %m.id,
                "score entry matches neither team"
            );
        }
    }
}

impl<F: HtmlFetcher> CricketScraper<F> {
    /// Fetch a match's scoreboard page and extract its team scores.
    /// Any failure is logged and reported as "no score".
    pub async fn fetch_match_score(&self, href: &str) -> Option<Vec<ScoreEntry>> {
        let url = self.config.score_url(href);

        let page = match self.fetcher.fetch(&url, self.config.score_timeout()).await {
            Ok(page) => page,
            Err(e) => {
                warn!(url = %url, error = %e, "failed to fetch match score");
                return None;
            }
        };

        let blocks = match html::block_texts(&page) {
            Ok(blocks) => blocks,
            Err(e) => {
                warn!(url = %url, error = %e, "failed to read scoreboard");
                return None;
            }
        };

        let entries = extract(&blocks);
        if entries.is_none() {
            debug!(url = %url, "no scores on scoreboard yet");
        }
        entries
    }
}
