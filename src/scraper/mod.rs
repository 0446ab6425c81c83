mod extract;
mod fetcher;
mod scraper;
mod scraper_error;

pub use extract::{ExpatDakarExtractor, ListingExtractor};
pub use fetcher::{HttpFetcher, PageFetcher};
pub use self::scraper::{ListingScraper, ListingSource, ScrapeReport, SkippedListing};
pub use scraper_error::ScraperError;
