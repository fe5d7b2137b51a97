use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning a workbook into an .ics file
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("failed to open Excel file: {0}")]
    Open(#[source] calamine::Error),

    #[error("failed to read sheet: {0}")]
    Sheet(#[source] calamine::Error),

    #[error("sheet {0} is empty")]
    EmptySheet(String),

    #[error("sheet must contain 'date', 'start time', 'end time', and 'subject' columns")]
    MissingColumns,

    #[error("invalid date or start time format in row {row}")]
    InvalidStart { row: usize },

    #[error("invalid date or end time format in row {row}")]
    InvalidEnd { row: usize },

    #[error("invalid entry in row {row}: {reason}")]
    InvalidEntry { row: usize, reason: String },

    #[error("invalid settings: {0}")]
    Settings(String),

    #[error("failed to create iCal file: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
