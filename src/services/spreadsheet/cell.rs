use calamine::{Data, ExcelDateTime};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Worksheet value reduced to what the converter cares about
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    Time(NaiveTime),
}

impl Cell {
    /// Build a text cell, trimming whitespace. Blank text becomes `Empty`.
    pub fn text(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(trimmed.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Text content of the cell, if it holds text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Human readable rendering, used for summaries
    pub fn display(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(text) => text.clone(),
            Cell::DateTime(value) => value.format("%Y-%m-%d %H:%M:%S").to_string(),
            Cell::Date(value) => value.format("%Y-%m-%d").to_string(),
            Cell::Time(value) => value.format("%H:%M:%S").to_string(),
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(value) => Cell::text(value),
            Data::Int(value) => Cell::Text(value.to_string()),
            Data::Float(value) => Cell::Text(value.to_string()),
            Data::Bool(value) => Cell::Text(value.to_string()),
            Data::DateTime(value) => from_excel_datetime(value),
            Data::DateTimeIso(value) => from_iso(value),
            Data::DurationIso(value) => match parse_iso_duration(value) {
                Some(time) => Cell::Time(time),
                None => Cell::text(value),
            },
            Data::Error(err) => Cell::Text(err.to_string()),
        }
    }
}

/// Excel stores dates as day serials; a serial below one is a bare time of day.
fn from_excel_datetime(value: &ExcelDateTime) -> Cell {
    let serial = value.as_f64();
    match value.as_datetime().map(round_to_second) {
        Some(parsed) if serial < 1.0 => Cell::Time(parsed.time()),
        Some(parsed) if parsed.time() == NaiveTime::MIN => Cell::Date(parsed.date()),
        Some(parsed) => Cell::DateTime(parsed),
        None => Cell::Empty,
    }
}

/// Snap float serials to whole seconds
fn round_to_second(value: NaiveDateTime) -> NaiveDateTime {
    let nanos = value.nanosecond();
    let truncated = value.with_nanosecond(0).unwrap_or(value);
    if nanos >= 500_000_000 {
        truncated + Duration::seconds(1)
    } else {
        truncated
    }
}

/// OpenDocument time cells arrive as ISO 8601 durations (`PT09H30M00S`).
/// Only durations shorter than a day are times of day.
fn parse_iso_duration(value: &str) -> Option<NaiveTime> {
    let rest = value.trim().strip_prefix("PT")?;
    let mut seconds = 0.0;
    let mut number = String::new();

    for ch in rest.chars() {
        let unit = match ch {
            '0'..='9' | '.' => {
                number.push(ch);
                continue;
            }
            'H' => 3600.0,
            'M' => 60.0,
            'S' => 1.0,
            _ => return None,
        };
        let amount: f64 = number.parse().ok()?;
        seconds += amount * unit;
        number.clear();
    }
    if !number.is_empty() {
        return None;
    }

    let seconds = seconds.round();
    if seconds >= 86_400.0 {
        return None;
    }
    NaiveTime::from_num_seconds_from_midnight_opt(seconds as u32, 0)
}

fn from_iso(value: &str) -> Cell {
    let trimmed = value.trim();
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Cell::DateTime(parsed);
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Cell::Date(parsed);
    }
    if let Ok(parsed) = NaiveTime::parse_from_str(trimmed, "%H:%M:%S%.f") {
        return Cell::Time(parsed);
    }
    Cell::text(trimmed)
}
