use super::cell::Cell;

pub const DATE_COLUMN: &str = "Date";
pub const START_TIME_COLUMN: &str = "Start Time";
pub const END_TIME_COLUMN: &str = "End Time";
pub const SUBJECT_COLUMN: &str = "Subject";

/// Zero-based positions of the required columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub date: usize,
    pub start_time: usize,
    pub end_time: usize,
    pub subject: usize,
}

impl ColumnMap {
    /// Locate the required columns in a header row.
    ///
    /// Header names are compared trimmed and case-insensitively; the first
    /// matching column wins. Returns `None` if any column is missing.
    pub fn from_header(header: &[Cell]) -> Option<Self> {
        Some(Self {
            date: find_column(header, DATE_COLUMN)?,
            start_time: find_column(header, START_TIME_COLUMN)?,
            end_time: find_column(header, END_TIME_COLUMN)?,
            subject: find_column(header, SUBJECT_COLUMN)?,
        })
    }
}

fn find_column(header: &[Cell], name: &str) -> Option<usize> {
    header.iter().position(|cell| {
        cell.as_text()
            .map(|text| text.trim().eq_ignore_ascii_case(name))
            .unwrap_or(false)
    })
}
