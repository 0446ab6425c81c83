pub mod export_csv;
pub mod export_xlsx;

pub use export_csv::{encode_csv, CsvCache};
pub use export_xlsx::export_table_xlsx;
