use crate::models::event::CalendarEntry;
use crate::models::settings::TimeZoneMode;
use chrono::{DateTime, Utc};

use super::utils::{datetime_property, escape_text, fold_line, format_datetime, format_utc};

pub const PRODUCT_ID: &str = "-//Excel to iCal Conversion//example.com//";

/// Options applied to a whole exported calendar
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub time_zone: TimeZoneMode,
    /// Written as `DTSTAMP` on every event
    pub generated_at: DateTime<Utc>,
}

pub(super) fn multiple(entries: &[CalendarEntry], options: &ExportOptions) -> String {
    let mut ics = calendar_header();
    for entry in entries {
        append_entry(&mut ics, entry, options);
    }
    push_line(&mut ics, "END:VCALENDAR");
    ics
}

fn calendar_header() -> String {
    let mut ics = String::new();
    push_line(&mut ics, "BEGIN:VCALENDAR");
    push_line(&mut ics, "VERSION:2.0");
    push_line(&mut ics, &format!("PRODID:{}", PRODUCT_ID));
    push_line(&mut ics, "CALSCALE:GREGORIAN");
    ics
}

fn append_entry(buffer: &mut String, entry: &CalendarEntry, options: &ExportOptions) {
    push_line(buffer, "BEGIN:VEVENT");
    push_line(buffer, &format!("UID:{}", build_uid(entry)));
    push_line(
        buffer,
        &format!("DTSTAMP:{}", format_utc(&options.generated_at)),
    );
    push_line(buffer, &format!("SUMMARY:{}", escape_text(&entry.summary)));
    push_line(
        buffer,
        &datetime_property("DTSTART", &entry.start, options.time_zone),
    );
    push_line(
        buffer,
        &datetime_property("DTEND", &entry.end, options.time_zone),
    );
    push_line(buffer, "END:VEVENT");
}

fn push_line(buffer: &mut String, line: &str) {
    buffer.push_str(&fold_line(line));
    buffer.push_str("\r\n");
}

fn build_uid(entry: &CalendarEntry) -> String {
    format!(
        "excel-to-ical-{}-r{}",
        format_datetime(&entry.start),
        entry.row
    )
}
