use serde::{Deserialize, Serialize};

/// One team's row in a group table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub position: u32,
    pub team: String,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub points: u32,
    pub nrr: String, // Kept as rendered, e.g. "+1.200" or "0.000"
}

/// A named pool of teams, e.g. "Group A" or "Super 8 Group 2"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStandings {
    pub group: String,
    pub teams: Vec<TeamStanding>,
}

/// Where a match is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Completed,
    Live,
    Upcoming,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Completed => "completed",
            MatchStatus::Live => "live",
            MatchStatus::Upcoming => "upcoming",
        }
    }
}

/// A fixture decoded from the series match list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub team1: String,
    pub team2: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team1_score: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team2_score: Option<String>,
    /// Verbatim status phrase; only present for completed matches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    pub venue: String,
    pub time: String,
    pub status: MatchStatus,
}

impl Match {
    pub fn format(&self) -> String {
        let side = |team: &str, score: &Option<String>| match score {
            Some(score) => format!("{} {}", team, score),
            None => team.to_string(),
        };

        let mut line = format!(
            "{} vs {} - {}",
            side(&self.team1, &self.team1_score),
            side(&self.team2, &self.team2_score),
            self.venue
        );
        if let Some(result) = &self.result {
            line.push_str(&format!(" ({})", result));
        }
        line
    }
}

/// Matches split by status, each list in page order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchBuckets {
    pub live: Vec<Match>,
    pub recent: Vec<Match>,
    pub upcoming: Vec<Match>,
}

impl MatchBuckets {
    pub fn len(&self) -> usize {
        self.live.len() + self.recent.len() + self.upcoming.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A team code and its score as scraped from a scoreboard page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoreEntry {
    pub team: String,
    pub score: String, // "runs/wickets (overs)"
}
