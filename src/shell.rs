// src/shell.rs
//
// What the sidebar selections mean. `dispatch` turns one `ShellInput` into a
// `View`; the router renders it. Network and file access come in through
// `Collaborators` so the branching can be tested without either.

use crate::domain::charts::{self, HistogramBin, PieSlice, PRICE_BINS};
use crate::domain::{Category, Table};
use crate::errors::ServerError;
use crate::scraper::ListingSource;
use crate::spreadsheets::CsvCache;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

pub const FORM_URL: &str = "https://ee.kobotoolbox.org/x/lgUh1tWb";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Scrape,
    DownloadSaved,
    Dashboard,
    ShowForm,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::Scrape,
        Action::DownloadSaved,
        Action::Dashboard,
        Action::ShowForm,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::Scrape => "Scrape the data",
            Action::DownloadSaved => "Download the scraped data",
            Action::Dashboard => "Dashboard of the data (clean)",
            Action::ShowForm => "Please fill the app form",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Action::Scrape => "scrape",
            Action::DownloadSaved => "download",
            Action::Dashboard => "dashboard",
            Action::ShowForm => "form",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.slug() == s)
            .ok_or_else(|| format!("unknown action '{s}'"))
    }
}

/// The three sidebar selections for a single interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellInput {
    pub category: Category,
    pub page: u32,
    pub action: Action,
}

impl Default for ShellInput {
    fn default() -> Self {
        Self {
            category: Category::default(),
            page: 1,
            action: Action::default(),
        }
    }
}

impl ShellInput {
    /// Missing keys fall back to the defaults; malformed ones are a `BadRequest`.
    /// A page beyond the category's last page is rejected here, never in the scraper.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, ServerError> {
        let defaults = Self::default();

        let category = match params.get("category") {
            Some(raw) => raw.parse::<Category>().map_err(ServerError::BadRequest)?,
            None => defaults.category,
        };
        let action = match params.get("action") {
            Some(raw) => raw.parse::<Action>().map_err(ServerError::BadRequest)?,
            None => defaults.action,
        };
        let page = match params.get("page") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ServerError::BadRequest(format!("invalid page '{raw}'")))?,
            None => defaults.page,
        };

        if !category.contains_page(page) {
            return Err(ServerError::BadRequest(format!(
                "page {page} is outside 1..={} for {category}",
                category.last_page()
            )));
        }

        Ok(Self {
            category,
            page,
            action,
        })
    }
}

/// Read access to the saved snapshot files.
pub trait SnapshotSource {
    /// Saved scrape offered for download.
    fn raw(&self, category: Category) -> Result<Table, ServerError>;
    /// Cleaned data behind the dashboard.
    fn cleaned(&self, category: Category) -> Result<Table, ServerError>;
}

pub struct Collaborators<'a> {
    pub listings: &'a dyn ListingSource,
    pub snapshots: &'a dyn SnapshotSource,
    pub csv_cache: &'a CsvCache,
}

#[derive(Debug, Clone)]
pub struct TableView {
    pub title: String,
    pub table: Table,
    pub csv: Arc<Vec<u8>>,
    pub csv_file_name: String,
}

#[derive(Debug, Clone)]
pub struct DashboardView {
    pub category: Category,
    pub rows: usize,
    pub histogram: Vec<HistogramBin>,
    pub areas: Vec<PieSlice>,
}

#[derive(Debug, Clone)]
pub enum View {
    Table(TableView),
    Dashboard(DashboardView),
    Form,
    DataNotFound { category: Category, message: String },
}

pub fn dispatch(input: &ShellInput, deps: &Collaborators<'_>) -> Result<View, ServerError> {
    let category = input.category;

    match input.action {
        Action::Scrape => {
            info!(%category, page = input.page, "live scrape requested");
            let batch = deps.listings.scrape(category, input.page)?;
            table_view(category, batch.to_table(), deps.csv_cache).map(View::Table)
        }
        Action::DownloadSaved => match deps.snapshots.raw(category) {
            Ok(table) => table_view(category, table, deps.csv_cache).map(View::Table),
            Err(err) => not_found(category, err),
        },
        Action::Dashboard => match deps.snapshots.cleaned(category).and_then(|t| dashboard(category, &t)) {
            Ok(view) => Ok(View::Dashboard(view)),
            Err(err) => not_found(category, err),
        },
        Action::ShowForm => Ok(View::Form),
    }
}

fn table_view(category: Category, table: Table, cache: &CsvCache) -> Result<TableView, ServerError> {
    let csv = cache.get_or_encode(&table)?;
    Ok(TableView {
        title: category.label().to_string(),
        table,
        csv,
        csv_file_name: category.csv_file_name(),
    })
}

fn dashboard(category: Category, table: &Table) -> Result<DashboardView, ServerError> {
    let prices = table
        .column("Price")
        .ok_or_else(|| ServerError::Snapshot("cleaned data has no Price column".into()))?;
    let areas = table
        .column("Area")
        .ok_or_else(|| ServerError::Snapshot("cleaned data has no Area column".into()))?;

    Ok(DashboardView {
        category,
        rows: table.rows().len(),
        histogram: charts::histogram(&charts::parse_prices(prices), PRICE_BINS),
        areas: charts::frequencies(areas),
    })
}

/// Snapshot problems become a visible "not found" state; anything else is a real error.
fn not_found(category: Category, err: ServerError) -> Result<View, ServerError> {
    match err {
        ServerError::SnapshotMissing(_) | ServerError::Snapshot(_) => {
            warn!(%category, error = %err, "snapshot unavailable");
            Ok(View::DataNotFound {
                category,
                message: err.to_string(),
            })
        }
        other => Err(other),
    }
}
