use anyhow::{Context, Result};
use cricket_live::routes::router;
use cricket_live::{CricketScraper, ScraperConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ScraperConfig::from_env()?;
    let scraper = CricketScraper::from_config(config).context("Failed to build HTTP client")?;

    let app = router(Arc::new(scraper));

    let addr = std::env::var("CRICKET_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    println!("\nStarting web server at http://{}", addr);
    println!("Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app).await?;

    Ok(())
}
