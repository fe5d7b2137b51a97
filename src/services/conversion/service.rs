use super::rows::{parse_rows, ParsedSheet};
use super::ConversionError;
use crate::models::settings::{Settings, TimeZoneMode, DEFAULT_SHEET_NAME};
use crate::services::icalendar::{ExportOptions, ICalendarService};
use crate::services::spreadsheet::read_sheet;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub events_written: usize,
    pub rows_skipped: usize,
    pub output: PathBuf,
}

/// Converts a worksheet of schedule rows into an .ics file
#[derive(Debug, Clone)]
pub struct ConversionService {
    sheet_name: String,
    time_zone: TimeZoneMode,
}

impl Default for ConversionService {
    fn default() -> Self {
        Self::new(DEFAULT_SHEET_NAME, TimeZoneMode::Utc)
    }
}

impl ConversionService {
    pub fn new(sheet_name: impl Into<String>, time_zone: TimeZoneMode) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            time_zone,
        }
    }

    /// Build a service from user settings
    pub fn from_settings(settings: &Settings) -> Result<Self, ConversionError> {
        settings.validate().map_err(ConversionError::Settings)?;
        let time_zone = settings
            .time_zone_mode()
            .map_err(ConversionError::Settings)?;
        Ok(Self::new(settings.sheet_name.trim(), time_zone))
    }

    /// Read and parse the configured sheet without writing anything
    pub fn read_entries(&self, input: &Path) -> Result<ParsedSheet, ConversionError> {
        let sheet = read_sheet(input, &self.sheet_name)?;
        if sheet.is_empty() {
            return Err(ConversionError::EmptySheet(self.sheet_name.clone()));
        }
        parse_rows(&sheet)
    }

    pub fn convert(&self, input: &Path, output: &Path) -> Result<ConversionReport, ConversionError> {
        self.convert_at(input, output, Utc::now())
    }

    /// Convert with an explicit `DTSTAMP`
    pub fn convert_at(
        &self,
        input: &Path,
        output: &Path,
        generated_at: DateTime<Utc>,
    ) -> Result<ConversionReport, ConversionError> {
        log::info!(
            "Converting sheet '{}' of {} into {}",
            self.sheet_name,
            input.display(),
            output.display()
        );

        let parsed = self.read_entries(input)?;

        let ics_service = ICalendarService::new(ExportOptions {
            time_zone: self.time_zone,
            generated_at,
        });
        ics_service
            .export_entries_to_file(&parsed.entries, output)
            .map_err(|source| {
                log::error!("Failed to write {}: {}", output.display(), source);
                ConversionError::Write {
                    path: output.to_path_buf(),
                    source,
                }
            })?;

        log::info!(
            "Wrote {} events to {} ({} rows skipped)",
            parsed.entries.len(),
            output.display(),
            parsed.skipped
        );

        Ok(ConversionReport {
            events_written: parsed.entries.len(),
            rows_skipped: parsed.skipped,
            output: output.to_path_buf(),
        })
    }
}
