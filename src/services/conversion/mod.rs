//! Excel to iCalendar conversion.

mod error;
pub mod rows;
mod service;

pub use error::ConversionError;
pub use rows::ParsedSheet;
pub use service::{ConversionReport, ConversionService};
