//! Workbook reading via calamine.

pub mod cell;
pub mod columns;
pub mod datetime;
mod reader;

pub use cell::Cell;
pub use columns::ColumnMap;
pub use reader::{read_sheet, SheetRows};
