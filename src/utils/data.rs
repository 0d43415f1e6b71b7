use crate::models::GroupStandings;
use crate::TournamentSnapshot;
use anyhow::{Context, Result};

/// Save a scrape snapshot to a JSON cache file
pub fn save_snapshot_to_cache(snapshot: &TournamentSnapshot, cache_file: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot")?;
    std::fs::write(cache_file, json).context("Failed to write cache file")?;
    Ok(())
}

/// Load a scrape snapshot from a JSON cache file
pub fn load_snapshot_from_cache(cache_file: &str) -> Result<TournamentSnapshot> {
    let json = std::fs::read_to_string(cache_file).context("Failed to read cache file")?;
    let snapshot: TournamentSnapshot =
        serde_json::from_str(&json).context("Failed to deserialize snapshot")?;
    Ok(snapshot)
}

/// Save group standings to CSV, one row per team
pub fn save_standings_to_csv(groups: &[GroupStandings], filename: &str) -> Result<()> {
    let mut writer = csv::Writer::from_path(filename).context("Failed to create CSV file")?;

    writer.write_record(["Group", "Position", "Team", "Played", "Won", "Lost", "Points", "NRR"])?;

    for group in groups {
        for team in &group.teams {
            writer.write_record([
                group.group.clone(),
                team.position.to_string(),
                team.team.clone(),
                team.played.to_string(),
                team.won.to_string(),
                team.lost.to_string(),
                team.points.to_string(),
                team.nrr.clone(),
            ])?;
        }
    }

    writer.flush().context("Failed to write CSV file")?;
    Ok(())
}
