use super::cell::Cell;
use crate::services::conversion::ConversionError;
use calamine::{open_workbook_auto, Reader};
use std::path::Path;

/// Rows of one worksheet, normalized to [`Cell`]s
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetRows {
    /// 1-based worksheet row number of `rows[0]`
    pub first_row: usize,
    pub rows: Vec<Vec<Cell>>,
}

impl SheetRows {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read a worksheet from a workbook on disk.
///
/// The format (xlsx, xlsm, xls, ods) is picked from the file extension.
pub fn read_sheet(path: &Path, sheet_name: &str) -> Result<SheetRows, ConversionError> {
    let mut workbook = open_workbook_auto(path).map_err(ConversionError::Open)?;

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(ConversionError::Sheet)?;

    // Ranges start at the first used cell, not necessarily A1
    let first_row = range
        .start()
        .map(|(row, _)| row as usize + 1)
        .unwrap_or(1);

    let rows: Vec<Vec<Cell>> = range
        .rows()
        .map(|row| row.iter().map(Cell::from).collect())
        .collect();

    log::debug!(
        "Read {} rows from sheet '{}' in {}",
        rows.len(),
        sheet_name,
        path.display()
    );

    Ok(SheetRows { first_row, rows })
}
