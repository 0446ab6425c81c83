// scraper/extract.rs
//
// Everything that knows about the site's markup lives in this file.

use crate::domain::ListingRecord;
use crate::scraper::ScraperError;
use scraper::{ElementRef, Html, Selector};
use url::Url;

const CARD: &str = "div.listings-cards__list-item";
const CARD_LINK: &str = "a";
const DETAILS: &str = "div.listing-item__details";
const AREA: &str = "dd.listing-item__properties__description";
const ADDRESS: &str = "div.listing-item__address";
const PRICE: &str = "span.listing-card__price__value";
const GALLERY: &str = "div.gallery__image__inner";
const GALLERY_IMAGE: &str = "img";

/// The details block reads like "Publié le 12 mars 2024 Catégorie Appartement ...";
/// the seventh word is the property type.
const DETAILS_TOKEN_INDEX: usize = 6;

const AREA_UNITS: [&str; 2] = ["mÂ²", "m²"];
const PRICE_CURRENCY: &str = "F Cfa";
const NARROW_NBSP: char = '\u{202f}';

/// Reads listing links off an index page and listing fields off a detail page.
pub trait ListingExtractor {
    /// One entry per listing card, in document order.
    /// The outer error is for the page as a whole; inner errors belong to a single card.
    fn listing_links(
        &self,
        index_html: &str,
        index_url: &str,
    ) -> Result<Vec<Result<String, ScraperError>>, ScraperError>;

    /// All five fields or an error; never a partial record.
    fn extract_listing(&self, detail_html: &str) -> Result<ListingRecord, ScraperError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ExpatDakarExtractor;

impl ExpatDakarExtractor {
    pub fn details(&self, doc: &Html) -> Result<String, ScraperError> {
        details_token(&text_of(first(doc, DETAILS)?))
    }

    pub fn area(&self, doc: &Html) -> Result<String, ScraperError> {
        Ok(clean_area(&text_of(first(doc, AREA)?)))
    }

    pub fn address(&self, doc: &Html) -> Result<String, ScraperError> {
        Ok(text_of(first(doc, ADDRESS)?).trim().to_string())
    }

    pub fn price(&self, doc: &Html) -> Result<String, ScraperError> {
        Ok(clean_price(&text_of(first(doc, PRICE)?)))
    }

    /// `srcset` of the first gallery image, kept verbatim.
    pub fn image_link(&self, doc: &Html) -> Result<String, ScraperError> {
        let gallery = first(doc, GALLERY)?;
        let img = gallery
            .select(&selector(GALLERY_IMAGE)?)
            .next()
            .ok_or(ScraperError::MissingElement("div.gallery__image__inner img"))?;

        img.value()
            .attr("srcset")
            .map(str::to_string)
            .ok_or(ScraperError::MissingAttribute {
                element: "gallery img",
                attr: "srcset",
            })
    }
}

impl ListingExtractor for ExpatDakarExtractor {
    fn listing_links(
        &self,
        index_html: &str,
        index_url: &str,
    ) -> Result<Vec<Result<String, ScraperError>>, ScraperError> {
        let base = Url::parse(index_url).map_err(|e| ScraperError::InvalidUrl {
            url: index_url.to_string(),
            reason: e.to_string(),
        })?;

        let doc = Html::parse_document(index_html);
        let card_sel = selector(CARD)?;
        let link_sel = selector(CARD_LINK)?;

        let links = doc
            .select(&card_sel)
            .map(|card| {
                let anchor = card
                    .select(&link_sel)
                    .next()
                    .ok_or(ScraperError::MissingElement("listing card anchor"))?;
                let href = anchor
                    .value()
                    .attr("href")
                    .ok_or(ScraperError::MissingAttribute {
                        element: "listing card anchor",
                        attr: "href",
                    })?;
                resolve(&base, href)
            })
            .collect();

        Ok(links)
    }

    fn extract_listing(&self, detail_html: &str) -> Result<ListingRecord, ScraperError> {
        let doc = Html::parse_document(detail_html);

        Ok(ListingRecord {
            details: self.details(&doc)?,
            area: self.area(&doc)?,
            address: self.address(&doc)?,
            price: self.price(&doc)?,
            image_link: self.image_link(&doc)?,
        })
    }
}

/// Seventh whitespace-separated word of the details block.
pub fn details_token(text: &str) -> Result<String, ScraperError> {
    text.split_whitespace()
        .nth(DETAILS_TOKEN_INDEX)
        .map(str::to_string)
        .ok_or_else(|| ScraperError::MalformedText {
            field: "Details",
            text: text.trim().to_string(),
        })
}

/// "75 m²" -> "75"
pub fn clean_area(text: &str) -> String {
    let mut area = text.trim().to_string();
    for unit in AREA_UNITS {
        area = area.replace(unit, "");
    }
    area.trim().to_string()
}

/// "250\u{202f}000 F Cfa" -> "250000"
pub fn clean_price(text: &str) -> String {
    text.trim()
        .replace(NARROW_NBSP, "")
        .replace(PRICE_CURRENCY, "")
        .trim()
        .to_string()
}

fn resolve(base: &Url, href: &str) -> Result<String, ScraperError> {
    base.join(href)
        .map(String::from)
        .map_err(|e| ScraperError::InvalidUrl {
            url: href.to_string(),
            reason: e.to_string(),
        })
}

fn selector(css: &'static str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::HtmlParse(format!("{css}: {e}")))
}

fn first<'a>(doc: &'a Html, css: &'static str) -> Result<ElementRef<'a>, ScraperError> {
    let sel = selector(css)?;
    doc.select(&sel).next().ok_or(ScraperError::MissingElement(css))
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}
