// Service module exports

pub mod conversion;
pub mod icalendar;
pub mod settings;
pub mod spreadsheet;
