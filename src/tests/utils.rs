// src/tests/utils.rs

use crate::router::App;
use crate::scraper::{ListingScraper, PageFetcher, ScraperError};
use crate::snapshots::SnapshotStore;
use astra::{Body, Request, Response};
use http::Method;
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

pub const RENTAL_PAGE_1: &str = "https://www.expat-dakar.com/appartements-a-louer?page=1";
pub const LISTING_1: &str = "https://www.expat-dakar.com/annonce/appartement-dakar-1";
pub const LISTING_2: &str = "https://www.expat-dakar.com/annonce/appartement-dakar-2";

/// Serves canned pages by exact URL and remembers every URL asked for.
/// Unknown URLs fail like a dead connection.
#[derive(Clone, Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), html.into());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl PageFetcher for StaticFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScraperError::Network(format!("connection refused: {url}")))
    }
}

pub fn index_page(links: &[&str]) -> String {
    let cards: String = links
        .iter()
        .map(|href| {
            format!(
                r#"<div class="listings-cards__list-item"><a href="{href}"><h2>Annonce</h2></a></div>"#
            )
        })
        .collect();
    format!(r#"<html><body><div class="listings-cards__list">{cards}</div></body></html>"#)
}

pub struct DetailFixture<'a> {
    pub kind: &'a str,
    pub area: &'a str,
    pub address: &'a str,
    pub price: Option<&'a str>,
    pub image: &'a str,
}

impl Default for DetailFixture<'_> {
    fn default() -> Self {
        Self {
            kind: "Appartement",
            area: "75 m²",
            address: "Dakar",
            price: Some("250\u{202f}000 F Cfa"),
            image: "https://www.expat-dakar.com/img/img1.jpg",
        }
    }
}

pub fn detail_page(fixture: &DetailFixture<'_>) -> String {
    let price = fixture
        .price
        .map(|p| format!(r#"<span class="listing-card__price__value"> {p} </span>"#))
        .unwrap_or_default();

    format!(
        r#"<html><body>
            <div class="listing-item__details">
                Publié le 3 janvier 2025 Catégorie {kind} à louer
            </div>
            <dl class="listing-item__properties">
                <dt>Superficie</dt>
                <dd class="listing-item__properties__description">{area}</dd>
            </dl>
            <div class="listing-item__address"> {address} </div>
            {price}
            <div class="gallery__image"><div class="gallery__image__inner">
                <img srcset="{image}" alt="photo">
            </div></div>
        </body></html>"#,
        kind = fixture.kind,
        area = fixture.area,
        address = fixture.address,
        image = fixture.image,
    )
}

/// Index page 1 of rental apartments with two cards; the second listing has no price.
pub fn two_card_site() -> StaticFetcher {
    StaticFetcher::new()
        .page(
            RENTAL_PAGE_1,
            index_page(&[LISTING_1, "/annonce/appartement-dakar-2"]),
        )
        .page(LISTING_1, detail_page(&DetailFixture::default()))
        .page(
            LISTING_2,
            detail_page(&DetailFixture {
                price: None,
                ..DetailFixture::default()
            }),
        )
}

/// Fresh, empty directory for snapshot files.
pub fn temp_snapshot_dir(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("listing_scraper_{name}_{nanos}"));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn write_snapshot(dir: &Path, file_name: &str, contents: &str) {
    std::fs::write(dir.join(file_name), contents).unwrap();
}

pub fn test_app(fetcher: StaticFetcher, snapshot_dir: PathBuf) -> App {
    App::new(ListingScraper::new(fetcher), SnapshotStore::new(snapshot_dir))
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn read_bytes(resp: Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.into_body().reader().read_to_end(&mut body).unwrap();
    body
}
