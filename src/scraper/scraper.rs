// scraper.rs
use crate::domain::{Category, ListingBatch, ListingRecord};
use crate::scraper::{ExpatDakarExtractor, ListingExtractor, PageFetcher, ScraperError};
use tracing::{debug, info};

/// A listing dropped from a batch, with the reason it was dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedListing {
    /// Position of the card on the index page.
    pub position: usize,
    /// Detail URL, when the card got far enough to have one.
    pub link: Option<String>,
    pub reason: ScraperError,
}

/// What happened to one listing card.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingOutcome {
    Parsed(ListingRecord),
    Skipped(SkippedListing),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeReport {
    pub index_url: String,
    pub cards_found: usize,
    pub batch: ListingBatch,
    pub skipped: Vec<SkippedListing>,
}

/// Fetches one index page, then each listing on it, strictly one request at a time.
pub struct ListingScraper {
    fetcher: Box<dyn PageFetcher + Send + Sync>,
    extractor: Box<dyn ListingExtractor + Send + Sync>,
}

/// Used by the shell for live scrapes.
pub trait ListingSource {
    fn scrape(&self, category: Category, page: u32) -> Result<ListingBatch, ScraperError>;
}

/// `{page}` in the template is replaced with the page number.
pub fn page_url(url_template: &str, page: u32) -> String {
    url_template.replace("{page}", &page.to_string())
}

impl ListingScraper {
    pub fn new(fetcher: impl PageFetcher + Send + Sync + 'static) -> Self {
        Self::with_extractor(fetcher, ExpatDakarExtractor)
    }

    pub fn with_extractor(
        fetcher: impl PageFetcher + Send + Sync + 'static,
        extractor: impl ListingExtractor + Send + Sync + 'static,
    ) -> Self {
        Self {
            fetcher: Box::new(fetcher),
            extractor: Box::new(extractor),
        }
    }

    /// Only a failure on the index page itself is returned as `Err`.
    /// Each listing that fails is recorded in `skipped` and left out of the batch.
    pub fn scrape_page(&self, url_template: &str, page: u32) -> Result<ScrapeReport, ScraperError> {
        let index_url = page_url(url_template, page);
        info!(%index_url, "scraping index page");

        let index_html = self.fetcher.fetch(&index_url)?;
        let links = self.extractor.listing_links(&index_html, &index_url)?;
        let cards_found = links.len();

        let mut records = Vec::new();
        let mut skipped = Vec::new();

        for (position, link) in links.into_iter().enumerate() {
            match self.listing_outcome(position, link) {
                ListingOutcome::Parsed(record) => records.push(record),
                ListingOutcome::Skipped(skip) => {
                    debug!(
                        position = skip.position,
                        link = skip.link.as_deref().unwrap_or("<none>"),
                        reason = %skip.reason,
                        "listing skipped"
                    );
                    skipped.push(skip);
                }
            }
        }

        info!(
            %index_url,
            cards_found,
            parsed = records.len(),
            skipped = skipped.len(),
            "index page done"
        );

        Ok(ScrapeReport {
            index_url,
            cards_found,
            batch: ListingBatch::new(records),
            skipped,
        })
    }

    fn listing_outcome(
        &self,
        position: usize,
        link: Result<String, ScraperError>,
    ) -> ListingOutcome {
        let link = match link {
            Ok(link) => link,
            Err(reason) => {
                return ListingOutcome::Skipped(SkippedListing {
                    position,
                    link: None,
                    reason,
                })
            }
        };

        let result = self
            .fetcher
            .fetch(&link)
            .and_then(|html| self.extractor.extract_listing(&html));

        match result {
            Ok(record) => ListingOutcome::Parsed(record),
            Err(reason) => ListingOutcome::Skipped(SkippedListing {
                position,
                link: Some(link),
                reason,
            }),
        }
    }
}

impl ListingSource for ListingScraper {
    fn scrape(&self, category: Category, page: u32) -> Result<ListingBatch, ScraperError> {
        self.scrape_page(&category.url_template(), page)
            .map(|report| report.batch)
    }
}
