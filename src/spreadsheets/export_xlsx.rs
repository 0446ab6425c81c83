use crate::domain::Table;
use crate::errors::ServerError;
use rust_xlsxwriter::Workbook;

/// Writes the table to a single-sheet workbook. Every cell is a string,
/// matching how listings are extracted.
pub fn export_table_xlsx(table: &Table, sheet_name: &str) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet
        .set_name(sheet_name)
        .map_err(|e| ServerError::XlsxError(format!("Invalid sheet name '{sheet_name}': {e}")))?;

    for (col, header) in table.headers().iter().enumerate() {
        worksheet
            .write_string(0, col as u16, header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, row) in table.rows().iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            worksheet
                .write_string(r, col as u16, cell)
                .map_err(|e| ServerError::XlsxError(format!("Failed to write row {r}: {e}")))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}
