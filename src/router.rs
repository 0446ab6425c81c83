use crate::domain::Category;
use crate::errors::ServerError;
use crate::responses::download::xlsx_mime;
use crate::responses::{
    attachment_response, css_response, html_response, html_response_with_status, json_response,
    ResultResp,
};
use crate::scraper::ListingSource;
use crate::shell::{dispatch, Collaborators, ShellInput, SnapshotSource, View};
use crate::spreadsheets::{export_table_xlsx, CsvCache};
use crate::templates::{self, pages};
use astra::Request;
use std::collections::HashMap;

/// Everything a request may need: the live scraper, the saved snapshots and the CSV cache.
pub struct App {
    pub listings: Box<dyn ListingSource + Send + Sync>,
    pub snapshots: Box<dyn SnapshotSource + Send + Sync>,
    pub csv_cache: CsvCache,
}

impl App {
    pub fn new(
        listings: impl ListingSource + Send + Sync + 'static,
        snapshots: impl SnapshotSource + Send + Sync + 'static,
    ) -> Self {
        Self {
            listings: Box::new(listings),
            snapshots: Box::new(snapshots),
            csv_cache: CsvCache::new(),
        }
    }

    fn collaborators(&self) -> Collaborators<'_> {
        Collaborators {
            listings: self.listings.as_ref(),
            snapshots: self.snapshots.as_ref(),
            csv_cache: &self.csv_cache,
        }
    }
}

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_query(&req);

    match (method, path) {
        ("GET", "/") => home(&params),
        ("GET", "/run") => run(&params, app),
        ("GET", "/export") => export(&params, app),
        ("GET", "/api/listings") => api_listings(&params, app),
        ("GET", "/static/app.css") => css_response(templates::STYLESHEET),
        _ => Err(ServerError::NotFound),
    }
}

/// The sidebar reloads here when the category changes, so a page that
/// doesn't exist in the new category falls back to page 1.
fn home(params: &HashMap<String, String>) -> ResultResp {
    let input = match ShellInput::from_query(params) {
        Ok(input) => input,
        Err(_) => {
            let mut params = params.clone();
            params.remove("page");
            ShellInput::from_query(&params)?
        }
    };

    html_response(pages::home_page(&input))
}

fn run(params: &HashMap<String, String>, app: &App) -> ResultResp {
    let input = ShellInput::from_query(params)?;

    match dispatch(&input, &app.collaborators())? {
        View::Table(view) => html_response(pages::listings_page(&input, &view)),
        View::Dashboard(view) => html_response(pages::dashboard_page(&input, &view)),
        View::Form => html_response(pages::form_page(&input)),
        View::DataNotFound { category, message } => html_response_with_status(
            404,
            pages::data_not_found_page(&input, category, &message),
        ),
    }
}

/// `GET /export?category=..&source=raw|clean&format=csv|xlsx`
fn export(params: &HashMap<String, String>, app: &App) -> ResultResp {
    let category = match params.get("category") {
        Some(raw) => raw.parse::<Category>().map_err(ServerError::BadRequest)?,
        None => Category::default(),
    };

    let (table, stem) = match params.get("source").map(String::as_str) {
        None | Some("raw") => (app.snapshots.raw(category)?, category.label().replace(' ', "_")),
        Some("clean") => (
            app.snapshots.cleaned(category)?,
            format!("{}_clean", category.label().replace(' ', "_")),
        ),
        Some(other) => return Err(ServerError::BadRequest(format!("unknown source '{other}'"))),
    };

    match params.get("format").map(String::as_str) {
        None | Some("csv") => {
            let bytes = app.csv_cache.get_or_encode(&table)?;
            attachment_response(bytes.to_vec(), &mime::TEXT_CSV_UTF_8, &format!("{stem}.csv"))
        }
        Some("xlsx") => {
            let bytes = export_table_xlsx(&table, category.label())?;
            attachment_response(bytes, &xlsx_mime(), &format!("{stem}.xlsx"))
        }
        Some(other) => Err(ServerError::BadRequest(format!("unknown format '{other}'"))),
    }
}

/// Live scrape returned as a JSON array of records.
fn api_listings(params: &HashMap<String, String>, app: &App) -> ResultResp {
    let input = ShellInput::from_query(params)?;
    let batch = app.listings.scrape(input.category, input.page)?;

    let body = serde_json::to_vec(&batch).map_err(|_| ServerError::InternalError)?;
    json_response(body)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
