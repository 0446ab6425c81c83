use crate::config::Config;
use crate::responses::error_to_response;
use crate::router::{handle, App};
use crate::scraper::{HttpFetcher, ListingScraper};
use crate::snapshots::SnapshotStore;
use anyhow::{Context, Result};
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod scraper;
mod shell;
mod snapshots;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,listing_scraper=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(?config, "configuration loaded");

    let fetcher = HttpFetcher::new(config.http_timeout, config.user_agent.as_deref())
        .context("Failed to build HTTP client")?;
    let app = App::new(
        ListingScraper::new(fetcher),
        SnapshotStore::new(config.snapshot_dir.clone()),
    );

    tracing::info!("Starting server at http://{}", config.bind_addr);

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    // Serve requests, passing the app into the closure
    server
        .serve(move |req, _info| match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => error_to_response(err),
        })
        .context("Server ended with error")?;

    tracing::info!("Server shut down cleanly.");
    Ok(())
}
