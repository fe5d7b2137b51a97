// Test fixtures - reusable workbooks
// Builds small schedule workbooks on disk for the integration tests

#![allow(dead_code)]

use rust_xlsxwriter::{Format, Workbook};
use std::path::{Path, PathBuf};

pub const HEADER: [&str; 4] = ["Date", "Start Time", "End Time", "Subject"];

/// Write a workbook whose cells are all text
pub fn text_workbook(dir: &Path, file_name: &str, sheet: &str, rows: &[&[&str]]) -> PathBuf {
    let path = dir.join(file_name);
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet).unwrap();

    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            worksheet.write(r as u32, c as u16, *value).unwrap();
        }
    }

    workbook.save(&path).unwrap();
    path
}

/// Write a workbook with real Excel date and time cells.
///
/// Each row is `(date serial, start serial, end serial, subject)`.
pub fn typed_workbook(dir: &Path, rows: &[(f64, f64, f64, &str)]) -> PathBuf {
    let path = dir.join("typed.xlsx");
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let time_format = Format::new().set_num_format("hh:mm");

    for (c, name) in HEADER.iter().enumerate() {
        worksheet.write(0, c as u16, *name).unwrap();
    }

    for (i, (date, start, end, subject)) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        worksheet
            .write_number_with_format(r, 0, *date, &date_format)
            .unwrap();
        worksheet
            .write_number_with_format(r, 1, *start, &time_format)
            .unwrap();
        worksheet
            .write_number_with_format(r, 2, *end, &time_format)
            .unwrap();
        worksheet.write(r, 3, *subject).unwrap();
    }

    workbook.save(&path).unwrap();
    path
}

/// Excel serial for 2024-03-01
pub const MARCH_1_2024: f64 = 45352.0;

/// Excel serial fraction for a time of day
pub fn time_serial(hour: u32, minute: u32) -> f64 {
    (hour as f64 * 60.0 + minute as f64) / (24.0 * 60.0)
}
