// scraper/fetcher.rs
use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::warn;

/// Anything that can turn a URL into a page body.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScraperError>;
}

/// Blocking GET with no retries.
/// Non-success statuses still return the body; a 404 page simply has nothing to extract.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// `timeout: None` waits forever, like a bare GET.
    pub fn new(timeout: Option<Duration>, user_agent: Option<&str>) -> Result<Self, ScraperError> {
        let mut builder = Client::builder().timeout(timeout);
        if let Some(ua) = user_agent {
            builder = builder.user_agent(ua.to_string());
        }

        let client = builder
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%url, %status, "non-success status, parsing body anyway");
        }

        resp.text()
            .map_err(|e| ScraperError::Network(e.to_string()))
    }
}
