//! Date and time parsing for schedule cells.
//!
//! Text cells accept ISO (`2024-03-01`) or day-first (`01/03/2024`) dates and
//! `HH:MM[:SS]` times. Typed Excel cells are used as-is.

use super::cell::Cell;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];
const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

pub fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

pub fn parse_time_text(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(text, format).ok())
}

/// Parse a date and a time given as separate strings, joined as `<date> <time>`
pub fn parse_date_time(date: &str, time: &str) -> Option<NaiveDateTime> {
    let combined = format!("{} {}", date.trim(), time.trim());
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&combined, format).ok())
}

pub fn cell_date(cell: &Cell) -> Option<NaiveDate> {
    match cell {
        Cell::Text(text) => parse_date_text(text),
        Cell::Date(date) => Some(*date),
        Cell::DateTime(value) => Some(value.date()),
        Cell::Time(_) | Cell::Empty => None,
    }
}

pub fn cell_time(cell: &Cell) -> Option<NaiveTime> {
    match cell {
        Cell::Text(text) => parse_time_text(text),
        Cell::Time(time) => Some(*time),
        Cell::DateTime(value) => Some(value.time()),
        Cell::Date(_) | Cell::Empty => None,
    }
}

/// Combine a date cell and a time cell into one timestamp
pub fn combine(date: &Cell, time: &Cell) -> Option<NaiveDateTime> {
    match (date, time) {
        (Cell::Text(date), Cell::Text(time)) => parse_date_time(date, time),
        _ => Some(cell_date(date)?.and_time(cell_time(time)?)),
    }
}
