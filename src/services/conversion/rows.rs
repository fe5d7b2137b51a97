use super::ConversionError;
use crate::models::event::CalendarEntry;
use crate::services::spreadsheet::datetime::combine;
use crate::services::spreadsheet::{Cell, ColumnMap, SheetRows};

/// Entries parsed from a worksheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSheet {
    pub entries: Vec<CalendarEntry>,
    /// Data rows left out because a required cell was blank
    pub skipped: usize,
}

static EMPTY: Cell = Cell::Empty;

/// Turn worksheet rows (header first) into calendar entries.
///
/// Rows with any required cell blank are skipped. The first row with an
/// unparseable date or time aborts the whole sheet.
pub fn parse_rows(sheet: &SheetRows) -> Result<ParsedSheet, ConversionError> {
    let (header, data) = sheet
        .rows
        .split_first()
        .ok_or(ConversionError::MissingColumns)?;
    let columns = ColumnMap::from_header(header).ok_or(ConversionError::MissingColumns)?;

    let mut parsed = ParsedSheet::default();

    for (index, row) in data.iter().enumerate() {
        let row_number = sheet.first_row + index + 1;
        let cell = |column: usize| row.get(column).unwrap_or(&EMPTY);

        let date = cell(columns.date);
        let start_time = cell(columns.start_time);
        let end_time = cell(columns.end_time);
        let subject = cell(columns.subject);

        if date.is_empty() || start_time.is_empty() || end_time.is_empty() || subject.is_empty() {
            parsed.skipped += 1;
            continue;
        }

        let start = combine(date, start_time)
            .ok_or(ConversionError::InvalidStart { row: row_number })?;
        let end =
            combine(date, end_time).ok_or(ConversionError::InvalidEnd { row: row_number })?;

        let entry = CalendarEntry::new(row_number, subject.display(), start, end).map_err(
            |reason| ConversionError::InvalidEntry {
                row: row_number,
                reason,
            },
        )?;
        parsed.entries.push(entry);
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use pretty_assertions::assert_eq;

    fn text_row(values: &[&str]) -> Vec<Cell> {
        values.iter().map(|value| Cell::text(value)).collect()
    }

    fn sheet(rows: Vec<Vec<Cell>>) -> SheetRows {
        SheetRows { first_row: 1, rows }
    }

    fn header() -> Vec<Cell> {
        text_row(&["Date", "Start Time", "End Time", "Subject"])
    }

    #[test]
    fn test_parse_rows() {
        let parsed = parse_rows(&sheet(vec![
            header(),
            text_row(&["2024-03-01", "09:00", "10:00", "Standup"]),
            text_row(&["02/03/2024", "13:00:00", "14:30:00", "Review"]),
        ]))
        .unwrap();

        assert_eq!(parsed.skipped, 0);
        assert_eq!(parsed.entries.len(), 2);

        let review = &parsed.entries[1];
        assert_eq!(review.row, 3);
        assert_eq!(review.summary, "Review");
        assert_eq!(
            review.start,
            NaiveDate::from_ymd_opt(2024, 3, 2)
                .unwrap()
                .and_hms_opt(13, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_incomplete_rows_skipped() {
        let parsed = parse_rows(&sheet(vec![
            header(),
            text_row(&["2024-03-01", "09:00", "10:00", ""]),
            text_row(&["", "09:00", "10:00", "No date"]),
            text_row(&["2024-03-01", "09:00"]),
            text_row(&["2024-03-01", "11:00", "12:00", "Kept"]),
        ]))
        .unwrap();

        assert_eq!(parsed.skipped, 3);
        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(parsed.entries[0].summary, "Kept");
        assert_eq!(parsed.entries[0].row, 5);
    }

    #[test]
    fn test_invalid_start_reports_row() {
        let err = parse_rows(&sheet(vec![
            header(),
            text_row(&["2024-03-01", "09:00", "10:00", "Fine"]),
            text_row(&["2024-03-01", "nine", "10:00", "Broken"]),
        ]))
        .unwrap_err();

        assert_eq!(err.to_string(), "invalid date or start time format in row 3");
    }

    #[test]
    fn test_invalid_end_reports_row() {
        let err = parse_rows(&sheet(vec![
            header(),
            text_row(&["2024-03-01", "09:00", "late", "Broken"]),
        ]))
        .unwrap_err();

        assert_eq!(err.to_string(), "invalid date or end time format in row 2");
    }

    #[test]
    fn test_missing_columns() {
        let err = parse_rows(&sheet(vec![text_row(&["Date", "Subject"])])).unwrap_err();
        assert!(matches!(err, ConversionError::MissingColumns));
    }

    #[test]
    fn test_row_numbers_follow_sheet_offset() {
        let parsed = parse_rows(&SheetRows {
            first_row: 4,
            rows: vec![
                header(),
                text_row(&["2024-03-01", "09:00", "10:00", "Offset"]),
            ],
        })
        .unwrap();

        assert_eq!(parsed.entries[0].row, 5);
    }

    #[test]
    fn test_typed_cells() {
        let parsed = parse_rows(&sheet(vec![
            header(),
            vec![
                Cell::Date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
                Cell::Time(NaiveTime::from_hms_opt(22, 0, 0).unwrap()),
                Cell::Time(NaiveTime::from_hms_opt(6, 0, 0).unwrap()),
                Cell::text("Night shift"),
            ],
        ]))
        .unwrap();

        let entry = &parsed.entries[0];
        assert_eq!(entry.end.date(), NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }
}
