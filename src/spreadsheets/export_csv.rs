use crate::domain::Table;
use crate::errors::ServerError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const CACHE_CAPACITY: usize = 64;

/// CSV bytes for a table: an unnamed leading index column, a header row, UTF-8.
///
/// ```text
/// ,Details,Area,Address,Price,ImageLink
/// 0,Appartement,75,Dakar,250000,https://...
/// ```
pub fn encode_csv(table: &Table) -> Result<Vec<u8>, ServerError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    let mut header = Vec::with_capacity(table.headers().len() + 1);
    header.push("");
    header.extend(table.headers().iter().map(String::as_str));
    wtr.write_record(&header)
        .map_err(|e| ServerError::Csv(format!("Failed to write header: {e}")))?;

    for (i, row) in table.rows().iter().enumerate() {
        let index = i.to_string();
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(index.as_str());
        record.extend(row.iter().map(String::as_str));
        wtr.write_record(&record)
            .map_err(|e| ServerError::Csv(format!("Failed to write row {i}: {e}")))?;
    }

    wtr.into_inner()
        .map_err(|e| ServerError::Csv(format!("Failed to flush CSV: {e}")))
}

/// Memoizes `encode_csv` per table content, so an identical table is only encoded once.
/// Cleared wholesale once it fills up.
#[derive(Default)]
pub struct CsvCache {
    entries: Mutex<HashMap<Table, Arc<Vec<u8>>>>,
}

impl CsvCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_encode(&self, table: &Table) -> Result<Arc<Vec<u8>>, ServerError> {
        if let Some(hit) = self.lock()?.get(table) {
            return Ok(Arc::clone(hit));
        }

        // Encode outside the lock; a concurrent miss on the same table just encodes twice.
        let bytes = Arc::new(encode_csv(table)?);

        let mut entries = self.lock()?;
        if entries.len() >= CACHE_CAPACITY {
            entries.clear();
        }
        entries.insert(table.clone(), Arc::clone(&bytes));
        Ok(bytes)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<Table, Arc<Vec<u8>>>>, ServerError> {
        self.entries.lock().map_err(|_| ServerError::InternalError)
    }
}
