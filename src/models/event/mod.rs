// Event module
// A single calendar entry read from one worksheet row

use chrono::{Duration, NaiveDateTime};

/// Calendar entry produced from one worksheet row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEntry {
    /// 1-based worksheet row the entry was read from
    pub row: usize,
    pub summary: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl CalendarEntry {
    /// Create a new entry.
    ///
    /// An `end` earlier than `start` is treated as an overnight entry and
    /// moved to the following day.
    ///
    /// # Examples
    /// ```
    /// use excel_to_ical::models::event::CalendarEntry;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    /// let entry = CalendarEntry::new(
    ///     2,
    ///     "Night shift",
    ///     day.and_hms_opt(22, 0, 0).unwrap(),
    ///     day.and_hms_opt(6, 0, 0).unwrap(),
    /// )
    /// .unwrap();
    /// assert_eq!(entry.end.date(), NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    /// ```
    pub fn new(
        row: usize,
        summary: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, String> {
        let summary = summary.into();

        if summary.trim().is_empty() {
            return Err("Entry summary cannot be empty".to_string());
        }

        let end = if end < start {
            end + Duration::days(1)
        } else {
            end
        };

        Ok(Self {
            row,
            summary,
            start,
            end,
        })
    }

    /// Get the duration of the entry
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}
