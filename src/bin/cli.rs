use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cricket_live::data::{load_snapshot_from_cache, save_snapshot_to_cache, save_standings_to_csv};
use cricket_live::{
    fetch_snapshot, CricketScraper, GroupStandings, MatchBuckets, ScraperConfig,
    TournamentSnapshot,
};

#[derive(Parser)]
#[command(name = "cricket-cli", about = "Scrape tournament standings and match state")]
struct Cli {
    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Group standings
    Standings {
        /// Also write the standings to this CSV file
        #[arg(long)]
        csv: Option<String>,
    },
    /// Live, recent and upcoming matches
    Matches,
    /// Standings and matches together
    Snapshot {
        /// Write the snapshot to this JSON cache file
        #[arg(long)]
        save: Option<String>,
        /// Read the snapshot from this cache file instead of scraping
        #[arg(long, conflicts_with = "save")]
        from_cache: Option<String>,
    },
}

fn print_standings(groups: &[GroupStandings]) {
    for group in groups {
        println!("{}\n", group.group);
        println!("{:>3}  {:<20} {:>2} {:>2} {:>2} {:>4} {:>8}", "#", "Team", "P", "W", "L", "Pts", "NRR");
        for team in &group.teams {
            println!(
                "{:>3}  {:<20} {:>2} {:>2} {:>2} {:>4} {:>8}",
                team.position, team.team, team.played, team.won, team.lost, team.points, team.nrr
            );
        }
        println!();
    }
}

fn print_matches(matches: &MatchBuckets) {
    for (title, bucket) in [
        ("LIVE", &matches.live),
        ("RECENT RESULTS", &matches.recent),
        ("UPCOMING", &matches.upcoming),
    ] {
        println!("{}\n", title);
        if bucket.is_empty() {
            println!("No matches.");
        }
        for (i, m) in bucket.iter().enumerate() {
            println!("{}. {}", i + 1, m.format());
        }
        println!();
    }
}

fn print_snapshot(snapshot: &TournamentSnapshot) {
    match &snapshot.standings {
        Some(groups) => print_standings(groups),
        None => println!("Standings unavailable.\n"),
    }
    match &snapshot.matches {
        Some(matches) => print_matches(matches),
        None => println!("Matches unavailable."),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = ScraperConfig::from_env()?;
    let scraper = CricketScraper::from_config(config).context("Failed to build HTTP client")?;

    match cli.command {
        Command::Standings { csv } => {
            let groups = scraper
                .fetch_standings()
                .await
                .context("No standings could be scraped")?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&groups)?);
            } else {
                print_standings(&groups);
            }

            if let Some(path) = csv {
                save_standings_to_csv(&groups, &path)?;
                println!("Saved standings to {}", path);
            }
        }
        Command::Matches => {
            let matches = scraper
                .fetch_matches()
                .await
                .context("No matches could be scraped")?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                print_matches(&matches);
            }
        }
        Command::Snapshot { save, from_cache } => {
            let snapshot = match from_cache {
                Some(path) => {
                    println!("Loading snapshot from cache file: {}\n", path);
                    load_snapshot_from_cache(&path)?
                }
                None => fetch_snapshot(&scraper).await,
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                print_snapshot(&snapshot);
            }

            if let Some(path) = save {
                save_snapshot_to_cache(&snapshot, &path)?;
                println!("Saved snapshot to cache file: {}", path);
            }
        }
    }

    Ok(())
}
