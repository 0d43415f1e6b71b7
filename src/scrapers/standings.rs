use crate::api::HtmlFetcher;
use crate::models::{GroupStandings, TeamStanding};
use crate::scrapers::{html, CricketScraper};
use crate::utils::teams::TeamNameResolver;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, warn};

/// CSS class of each points table row
pub const STANDINGS_ROW_SELECTOR: &str = ".point-table-grid";

static GROUP_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(Group [A-H]|Super 8 Group \d)").expect("valid group header pattern")
});

// "SUPER 8 G1", the table shown before Super 8 seeding was settled
static LEGACY_SUPER_EIGHT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^SUPER 8 G\d").expect("valid legacy header pattern"));

// rank, code, optional (Q)/(E) tag, then P W L NR Pts as single digits, then NRR
static TEAM_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)([A-Z]+)\s*(?:\([A-Z]\)\s*)?(\d)(\d)(\d)(\d)(\d)([-+]?\d+\.\d+)$")
        .expect("valid team row pattern")
});

/// What a single table row turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Start of a new group with this label
    GroupStart(String),
    /// Start of a placeholder table; its rows are dropped
    Placeholder,
    /// Column headers and other chrome
    Skip,
    Team(TeamStanding),
}

/// Claims a row, or returns `None` to let the next recognizer try
pub type Recognizer = fn(&str, &TeamNameResolver) -> Option<Row>;

pub fn group_header(row: &str, _teams: &TeamNameResolver) -> Option<Row> {
    GROUP_HEADER
        .captures(row)
        .map(|caps| Row::GroupStart(caps[1].to_string()))
}

pub fn pre_seeding_header(row: &str, _teams: &TeamNameResolver) -> Option<Row> {
    if LEGACY_SUPER_EIGHT.is_match(row) || row.to_lowercase().contains("pre-seeding") {
        Some(Row::Placeholder)
    } else {
        None
    }
}

pub fn column_header(row: &str, _teams: &TeamNameResolver) -> Option<Row> {
    if row.contains("PWL") || row.contains("NRPts") {
        Some(Row::Skip)
    } else {
        None
    }
}

pub fn team_row(row: &str, teams: &TeamNameResolver) -> Option<Row> {
    let caps = TEAM_ROW.captures(row)?;
    let digit = |i: usize| caps[i].parse::<u32>().ok();

    // caps[6] is the no-result column, positional only
    Some(Row::Team(TeamStanding {
        position: caps[1].parse().ok()?,
        team: teams.resolve(&caps[2]).to_string(),
        played: digit(3)?,
        won: digit(4)?,
        lost: digit(5)?,
        points: digit(7)?,
        nrr: caps[8].to_string(),
    }))
}

/// Points table rows arrive as one run of text with no delimiters between
/// columns, e.g. `1IND (Q)33006+3.050`. Each row goes through the
/// recognizers in order and the first one to claim it decides what it is.
pub struct StandingsDecoder<'a> {
    teams: &'a TeamNameResolver,
    recognizers: Vec<Recognizer>,
}

impl<'a> StandingsDecoder<'a> {
    pub fn new(teams: &'a TeamNameResolver) -> Self {
        Self {
            teams,
            recognizers: vec![pre_seeding_header, group_header, column_header, team_row],
        }
    }

    /// Add a recognizer that runs ahead of the built-in ones
    pub fn with_recognizer(mut self, recognizer: Recognizer) -> Self {
        self.recognizers.insert(0, recognizer);
        self
    }

    pub fn recognize(&self, row: &str) -> Option<Row> {
        self.recognizers
            .iter()
            .find_map(|recognize| recognize(row, self.teams))
    }

    /// Decode rows in page order into groups. Groups without a single
    /// decoded team are left out; `None` when nothing was decoded.
    pub fn decode<S: AsRef<str>>(&self, rows: &[S]) -> Option<Vec<GroupStandings>> {
        let mut groups = Vec::new();
        let mut current: Option<GroupStandings> = None;

        for row in rows {
            let row = row.as_ref();
            match self.recognize(row) {
                Some(Row::GroupStart(group)) => {
                    flush(&mut groups, current.take());
                    current = Some(GroupStandings {
                        group,
                        teams: Vec::new(),
                    });
                }
                Some(Row::Placeholder) => flush(&mut groups, current.take()),
                Some(Row::Skip) => {}
                Some(Row::Team(standing)) => match current.as_mut() {
                    Some(group) => group.teams.push(standing),
                    None => debug!(row, "team row outside a group"),
                },
                None => debug!(row, "unrecognized standings row"),
            }
        }
        flush(&mut groups, current);

        if groups.is_empty() {
            None
        } else {
            Some(groups)
        }
    }
}

fn flush(groups: &mut Vec<GroupStandings>, group: Option<GroupStandings>) {
    if let Some(group) = group.filter(|g| !g.teams.is_empty()) {
        groups.push(group);
    }
}

impl<F: HtmlFetcher> CricketScraper<F> {
    /// Scrape the points table. Never fails: fetch errors, parse errors and
    /// an empty table all come back as `None`.
    pub async fn fetch_standings(&self) -> Option<Vec<GroupStandings>> {
        let url = self.config.standings_url();

        let page = match self.fetcher.fetch(&url, self.config.listing_timeout()).await {
            Ok(page) => page,
            Err(e) => {
                warn!(url = %url, error = %e, "failed to fetch standings");
                return None;
            }
        };

        let rows = match html::select_texts(&page, STANDINGS_ROW_SELECTOR) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(url = %url, error = %e, "failed to read standings table");
                return None;
            }
        };

        let groups = StandingsDecoder::new(&self.teams).decode(&rows);
        match &groups {
            Some(groups) => info!(groups = groups.len(), "decoded standings"),
            None => warn!(url = %url, rows = rows.len(), "no standings decoded"),
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fetch::testing::StaticFetcher;
    use crate::config::ScraperConfig;

    fn decode(rows: &[&str]) -> Option<Vec<GroupStandings>> {
        let teams = TeamNameResolver::default();
        StandingsDecoder::new(&teams).decode(rows)
    }

    fn group_names(groups: &[GroupStandings]) -> Vec<&str> {
        groups.iter().map(|g| g.group.as_str()).collect()
    }

    #[test]
    fn test_decode_single_group() {
        let groups = decode(&["Group A", "1IND 32102+1.200", "2PAK 31202+0.500"]).unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].group, "Group A");
        assert_eq!(groups[0].teams.len(), 2);
        assert_eq!(
            groups[0].teams[0],
            TeamStanding {
                position: 1,
                team: "India".to_string(),
                played: 3,
                won: 2,
                lost: 1,
                points: 2,
                nrr: "+1.200".to_string(),
            }
        );
        assert_eq!(groups[0].teams[1].team, "Pakistan");
        assert_eq!(groups[0].teams[1].nrr, "+0.500");
    }

    #[test]
    fn test_qualifier_tag_does_not_shift_digits() {
        let groups = decode(&["Group A", "1IND (Q)44008+2.500", "2NZ (E)32104+0.600"]).unwrap();
        let india = &groups[0].teams[0];
        assert_eq!(india.team, "India");
        assert_eq!((india.played, india.won, india.lost, india.points), (4, 4, 0, 8));
        assert_eq!(india.nrr, "+2.500");

        let nz = &groups[0].teams[1];
        assert_eq!(nz.team, "New Zealand");
        assert_eq!((nz.played, nz.won, nz.lost, nz.points), (3, 2, 1, 4));
    }

    #[test]
    fn test_qualifier_tag_with_collapsed_whitespace() {
        let groups = decode(&["Group B", "1AUS (Q) 33006+2.100"]).unwrap();
        assert_eq!(groups[0].teams[0].team, "Australia");
        assert_eq!(groups[0].teams[0].points, 6);
    }

    #[test]
    fn test_unsigned_nrr_and_no_result_column() {
        let groups = decode(&["Super 8 Group 2PWLNRPtsNRR", "2PAK 100110.000"]).unwrap();
        let pak = &groups[0].teams[0];
        assert_eq!(pak.position, 2);
        assert_eq!((pak.played, pak.won, pak.lost, pak.points), (1, 0, 0, 1));
        assert_eq!(pak.nrr, "0.000");
    }

    #[test]
    fn test_header_rows_carry_column_names() {
        let groups = decode(&[
            "Super 8 Group 1PWLNRPtsNRR",
            "1WI 11002+1.820",
            "2IND 000000.000",
            "Group APWLNRPtsNRR",
            "1IND (Q)33006+3.050",
            "Group BPWLNRPtsNRR",
            "1AUS 33006+2.100",
        ])
        .unwrap();

        assert_eq!(
            group_names(&groups),
            ["Super 8 Group 1", "Group A", "Group B"]
        );
        assert_eq!(groups[0].teams[0].team, "West Indies");
        assert_eq!(groups[0].teams[0].nrr, "+1.820");
        assert_eq!(groups[0].teams.len(), 2);
    }

    #[test]
    fn test_column_header_rows_are_skipped() {
        let groups = decode(&["Group C", "PWLNRPtsNRR", "1ENG 33006+1.900"]).unwrap();
        assert_eq!(groups[0].teams.len(), 1);
        assert_eq!(groups[0].teams[0].team, "England");
    }

    #[test]
    fn test_legacy_pre_seeding_rows_are_dropped() {
        let groups = decode(&[
            "Group APWLNRPtsNRR",
            "1IND 33006+3.050",
            "SUPER 8 G1 Pre-Seeding",
            "1IND 000000.000",
        ])
        .unwrap();

        assert_eq!(group_names(&groups), ["Group A"]);
        assert_eq!(groups[0].teams.len(), 1);
    }

    #[test]
    fn test_modern_pre_seeding_header_is_dropped() {
        let groups = decode(&[
            "Group A",
            "1IND 32102+1.200",
            "Super 8 Group 1 Pre-Seeding",
            "1AUS 000000.000",
        ])
        .unwrap();

        assert_eq!(group_names(&groups), ["Group A"]);
        assert_eq!(groups[0].teams.len(), 1);
    }

    #[test]
    fn test_legacy_super_eight_header_without_marker() {
        let groups = decode(&["Group A", "1IND 32102+1.200", "SUPER 8 G1", "1AUS 33004+2.000"])
            .unwrap();
        assert_eq!(group_names(&groups), ["Group A"]);
        assert_eq!(groups[0].teams.len(), 1);
    }

    #[test]
    fn test_group_without_teams_is_not_materialized() {
        let groups = decode(&[
            "Group APWLNRPtsNRR",
            "not a valid team row",
            "Group BPWLNRPtsNRR",
            "1AUS 33006+2.100",
        ])
        .unwrap();
        assert_eq!(group_names(&groups), ["Group B"]);
    }

    #[test]
    fn test_team_rows_before_any_group_are_dropped() {
        let groups = decode(&["1IND 32102+1.200", "Group D", "1RSA 33006+2.500"]).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].teams[0].team, "South Africa");
    }

    #[test]
    fn test_nothing_decoded_is_none() {
        assert_eq!(decode(&[]), None);
        assert_eq!(decode(&["Group A", "PWLNRPtsNRR"]), None);
        assert_eq!(decode(&["No tables here"]), None);
    }

    #[test]
    fn test_won_never_exceeds_played() {
        let groups = decode(&[
            "Group A",
            "1IND (Q)33006+3.050",
            "2PAK (Q)22004+1.200",
            "3USA 31202-0.500",
            "4NED 30300-1.800",
        ])
        .unwrap();
        for team in &groups[0].teams {
            assert!(team.won <= team.played, "{:?}", team);
        }
    }

    #[test]
    fn test_custom_recognizer_runs_first() {
        fn playoff_header(row: &str, _teams: &TeamNameResolver) -> Option<Row> {
            row.starts_with("Playoffs")
                .then(|| Row::GroupStart("Playoffs".to_string()))
        }

        let teams = TeamNameResolver::default();
        let decoder = StandingsDecoder::new(&teams).with_recognizer(playoff_header);
        let groups = decoder
            .decode(&["PlayoffsPWLNRPtsNRR", "1IND 11002+0.400"])
            .unwrap();
        assert_eq!(group_names(&groups), ["Playoffs"]);
    }

    #[tokio::test]
    async fn test_fetch_standings() {
        let config = ScraperConfig::default();
        let page = r#"<html><body>
            <div class="point-table-grid">Group APWLNRPtsNRR</div>
            <div class="point-table-grid">1IND (Q)33006+3.050</div>
            <div class="point-table-grid">2PAK (Q)22004+1.200</div>
            <div class="point-table-grid">Group BPWLNRPtsNRR</div>
            <div class="point-table-grid">1AUS 33006+2.100</div>
        </body></html>"#;
        let fetcher = StaticFetcher::new().page(config.standings_url(), page);
        let scraper = CricketScraper::new(fetcher, config);

        let groups = scraper.fetch_standings().await.unwrap();
        assert_eq!(group_names(&groups), ["Group A", "Group B"]);
        assert_eq!(groups[0].teams[1].team, "Pakistan");
        assert_eq!(groups[0].teams[1].won, 2);
    }

    #[tokio::test]
    async fn test_fetch_standings_from_per_cell_markup() {
        let config = ScraperConfig::default();
        let page = r#"<html><body>
            <div class="point-table-grid"><span>Group A</span><span>P</span><span>W</span><span>L</span><span>NR</span><span>Pts</span><span>NRR</span></div>
            <div class="point-table-grid"><span>1</span><span>IND</span> <span>(Q)</span><span>3</span><span>3</span><span>0</span><span>0</span><span>6</span><span>+3.050</span></div>
            <div class="point-table-grid"><span>2</span><span>PAK</span> <span>3</span><span>2</span><span>1</span><span>0</span><span>2</span><span>+1.200</span></div>
        </body></html>"#;
        let fetcher = StaticFetcher::new().page(config.standings_url(), page);
        let scraper = CricketScraper::new(fetcher, config);

        let groups = scraper.fetch_standings().await.unwrap();
        assert_eq!(group_names(&groups), ["Group A"]);
        let india = &groups[0].teams[0];
        assert_eq!(india.team, "India");
        assert_eq!((india.played, india.won, india.lost, india.points), (3, 3, 0, 6));
        assert_eq!(groups[0].teams[1].nrr, "+1.200");
    }

    #[tokio::test]
    async fn test_fetch_standings_without_table_is_none() {
        let config = ScraperConfig::default();
        let fetcher = StaticFetcher::new().page(
            config.standings_url(),
            "<html><body><div>No tables here</div></body></html>",
        );
        let scraper = CricketScraper::new(fetcher, config);

        assert_eq!(scraper.fetch_standings().await, None);
    }

    #[tokio::test]
    async fn test_fetch_standings_transport_failure_is_none() {
        let scraper = CricketScraper::new(StaticFetcher::new(), ScraperConfig::default());
        assert_eq!(scraper.fetch_standings().await, None);
    }
}
