// errors.rs
use crate::domain::Category;
use crate::scraper::ScraperError;
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad input, etc.) or downstream layers (scraping, snapshots, exports).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Data for {0} not found!")]
    SnapshotMissing(Category),
    #[error("Snapshot Error: {0}")]
    Snapshot(String),
    #[error("Scrape failed: {0}")]
    Scrape(#[from] ScraperError),
    #[error("CSV Error: {0}")]
    Csv(String),
    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound | ServerError::SnapshotMissing(_) => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Scrape(_) => 502,
            ServerError::Snapshot(_)
            | ServerError::Csv(_)
            | ServerError::XlsxError(_)
            | ServerError::InternalError => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
