// src/domain/listing.rs

use crate::domain::table::Table;
use serde::{Deserialize, Serialize};

/// Column order used for tables, CSV and XLSX exports.
pub const LISTING_COLUMNS: [&str; 5] = ["Details", "Area", "Address", "Price", "ImageLink"];

/// One listing as extracted from its detail page.
/// Every field is raw text after cosmetic cleanup; nothing is parsed to numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingRecord {
    #[serde(rename = "Details")]
    pub details: String,
    #[serde(rename = "Area")]
    pub area: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "ImageLink")]
    pub image_link: String,
}

impl ListingRecord {
    fn to_row(&self) -> Vec<String> {
        vec![
            self.details.clone(),
            self.area.clone(),
            self.address.clone(),
            self.price.clone(),
            self.image_link.clone(),
        ]
    }
}

/// Records from one scrape, in the order their cards appeared on the index page.
/// There is no mutable access once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ListingBatch {
    records: Vec<ListingRecord>,
}

impl ListingBatch {
    pub fn new(records: Vec<ListingRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ListingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Tabular view: the five listing columns, one row per record.
    /// An empty batch still carries the five headers.
    pub fn to_table(&self) -> Table {
        Table::new(
            LISTING_COLUMNS.iter().map(|c| c.to_string()).collect(),
            self.records.iter().map(ListingRecord::to_row).collect(),
        )
    }
}

impl FromIterator<ListingRecord> for ListingBatch {
    fn from_iter<I: IntoIterator<Item = ListingRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
