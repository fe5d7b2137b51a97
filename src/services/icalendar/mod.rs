//! RFC 5545 (.ics) export service.

pub mod export;
mod service;
pub mod utils;

pub use export::ExportOptions;
pub use service::ICalendarService;
