// snapshots.rs
use crate::domain::{Category, Table};
use crate::errors::ServerError;
use crate::shell::SnapshotSource;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::debug;

/// Previously saved CSV files, two per category, in one directory.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn load(&self, category: Category, file_name: &str) -> Result<Table, ServerError> {
        let path = self.dir.join(file_name);
        debug!(path = %path.display(), "reading snapshot");

        let file = File::open(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ServerError::SnapshotMissing(category),
            _ => ServerError::Snapshot(format!("Failed to open {}: {e}", path.display())),
        })?;

        read_table(file)
            .map_err(|e| ServerError::Snapshot(format!("Failed to read {}: {e}", path.display())))
    }
}

impl SnapshotSource for SnapshotStore {
    fn raw(&self, category: Category) -> Result<Table, ServerError> {
        self.load(category, category.raw_snapshot_file())
    }

    fn cleaned(&self, category: Category) -> Result<Table, ServerError> {
        self.load(category, category.clean_snapshot_file())
    }
}

/// Reads a CSV with a header row. A leading column with an empty header is
/// the row index written by the exporter and is dropped.
pub fn read_table<R: Read>(reader: R) -> Result<Table, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let mut headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let has_index = headers.first().is_some_and(|h| h.trim().is_empty());
    if has_index {
        headers.remove(0);
    }

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let skip = usize::from(has_index);
        rows.push(record.iter().skip(skip).map(str::to_string).collect());
    }

    Ok(Table::new(headers, rows))
}
