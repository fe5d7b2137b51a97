use super::export::{self, ExportOptions};
use crate::models::event::CalendarEntry;
use std::fs;
use std::io;
use std::path::Path;

/// Service for writing calendar entries as iCalendar (.ics) data
#[derive(Debug, Clone)]
pub struct ICalendarService {
    options: ExportOptions,
}

impl ICalendarService {
    /// Create a new ICalendarService
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Export entries to an iCalendar formatted string
    pub fn export_entries(&self, entries: &[CalendarEntry]) -> String {
        export::multiple(entries, &self.options)
    }

    /// Export entries to a .ics file on disk.
    ///
    /// The document is rendered in memory first, so nothing is written when
    /// rendering fails.
    pub fn export_entries_to_file(&self, entries: &[CalendarEntry], path: &Path) -> io::Result<()> {
        let content = self.export_entries(entries);
        fs::write(path, content)
    }
}
