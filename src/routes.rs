use crate::api::HtmlFetcher;
use crate::models::{GroupStandings, Match};
use crate::scrapers::CricketScraper;
use crate::utils::fallback;
use crate::{fetch_snapshot, TournamentSnapshot};
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CricketResponse {
    pub standings: Vec<GroupStandings>,
    pub live_matches: Vec<Match>,
    pub recent_results: Vec<Match>,
    pub upcoming_matches: Vec<Match>,
    pub using_fallback_data: bool,
    pub last_updated: String,
}

impl CricketResponse {
    pub fn from_snapshot(snapshot: TournamentSnapshot, now: DateTime<Utc>) -> Self {
        let using_fallback_data = snapshot.standings.is_none() || snapshot.matches.is_none();

        let standings = snapshot.standings.unwrap_or_else(fallback::standings);
        let matches = snapshot.matches.unwrap_or_else(fallback::matches);

        Self {
            standings,
            live_matches: matches.live,
            recent_results: matches.recent,
            upcoming_matches: matches.upcoming,
            using_fallback_data,
            last_updated: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// `GET /api/cricket`. Never fails: whatever the scrape can't provide comes
/// from the fallback dataset.
pub fn router<F>(scraper: Arc<CricketScraper<F>>) -> Router
where
    F: HtmlFetcher + Send + Sync + 'static,
{
    Router::new()
        .route("/api/cricket", get(cricket::<F>))
        .layer(TraceLayer::new_for_http())
        .with_state(scraper)
}

async fn cricket<F>(State(scraper): State<Arc<CricketScraper<F>>>) -> Json<CricketResponse>
where
    F: HtmlFetcher + Send + Sync + 'static,
{
    let snapshot = fetch_snapshot(&scraper).await;
    let response = CricketResponse::from_snapshot(snapshot, Utc::now());

    info!(
        groups = response.standings.len(),
        live = response.live_matches.len(),
        fallback = response.using_fallback_data,
        "served cricket data"
    );
    Json(response)
}
