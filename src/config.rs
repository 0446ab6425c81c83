use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub snapshot_dir: PathBuf,
    /// `None` means requests never time out.
    pub http_timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            bind_addr: env::var("BIND_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
                .parse()
                .context("BIND_ADDR must be a socket address like 127.0.0.1:3000")?,
            max_workers: env::var("MAX_WORKERS")
                .unwrap_or_else(|_| "8".to_string())
                .parse()
                .context("MAX_WORKERS must be a positive number")?,
            snapshot_dir: env::var("SNAPSHOT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            http_timeout: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .map(|s| s.parse::<u64>().map(Duration::from_secs))
                .transpose()
                .context("HTTP_TIMEOUT_SECS must be a number of seconds")?,
            user_agent: env::var("SCRAPER_USER_AGENT").ok().filter(|ua| !ua.is_empty()),
        })
    }
}
