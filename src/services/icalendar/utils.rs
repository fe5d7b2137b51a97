use crate::models::settings::TimeZoneMode;
use chrono::{DateTime, NaiveDateTime, Utc};

/// Maximum octets per content line, excluding the CRLF
pub const MAX_LINE_OCTETS: usize = 75;

pub(super) fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

pub(super) fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Render a date-time property (`DTSTART`, `DTEND`) for the given zone mode
pub(super) fn datetime_property(name: &str, dt: &NaiveDateTime, mode: TimeZoneMode) -> String {
    match mode {
        TimeZoneMode::Utc => format!("{}:{}Z", name, format_datetime(dt)),
        TimeZoneMode::Floating => format!("{}:{}", name, format_datetime(dt)),
        TimeZoneMode::Zone(tz) => {
            format!("{};TZID={}:{}", name, tz.name(), format_datetime(dt))
        }
    }
}

pub(super) fn escape_text(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "")
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace(',', "\\,")
        .replace(';', "\\;")
}

/// Fold a content line so no physical line exceeds 75 octets.
///
/// Continuation lines start with a single space. Splits never fall inside a
/// UTF-8 sequence.
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut folded = String::with_capacity(line.len() + (line.len() / MAX_LINE_OCTETS) * 3);
    let mut width = 0;

    for ch in line.chars() {
        let len = ch.len_utf8();
        if width + len > MAX_LINE_OCTETS {
            folded.push_str("\r\n ");
            width = 1;
        }
        folded.push(ch);
        width += len;
    }

    folded
}

/// Reverse [`fold_line`] on a whole document
pub fn unfold(text: &str) -> String {
    text.replace("\r\n ", "")
}
