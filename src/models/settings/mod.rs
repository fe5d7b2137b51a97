// Settings module
// User options persisted between sessions

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_SHEET_NAME: &str = "Sheet1";
pub const DEFAULT_OUTPUT_NAME: &str = "events.ics";
pub const DEFAULT_TIME_ZONE: &str = "UTC";
pub const FLOATING_TIME_ZONE: &str = "floating";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Worksheet holding the schedule
    pub sheet_name: String,
    /// `UTC`, `floating`, or an IANA zone name such as `Europe/Berlin`
    pub time_zone: String,
    /// File name proposed by the save dialog
    pub default_output_name: String,
    /// Directory the file dialogs open in
    pub last_directory: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            time_zone: DEFAULT_TIME_ZONE.to_string(),
            default_output_name: DEFAULT_OUTPUT_NAME.to_string(),
            last_directory: None,
        }
    }
}

impl Settings {
    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        if self.sheet_name.trim().is_empty() {
            return Err("Sheet name cannot be empty".to_string());
        }
        if self.default_output_name.trim().is_empty() {
            return Err("Default output name cannot be empty".to_string());
        }
        self.time_zone_mode()?;
        Ok(())
    }

    /// Resolve the configured time zone
    pub fn time_zone_mode(&self) -> Result<TimeZoneMode, String> {
        self.time_zone.parse()
    }
}

/// How wall-clock times from the sheet are written to the calendar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeZoneMode {
    /// Times are written as UTC (`Z` suffix)
    #[default]
    Utc,
    /// Times carry no zone and follow the viewer's clock
    Floating,
    /// Times are tagged with a `TZID` parameter
    Zone(Tz),
}

impl FromStr for TimeZoneMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(TimeZoneMode::Utc);
        }
        if trimmed.eq_ignore_ascii_case(FLOATING_TIME_ZONE) {
            return Ok(TimeZoneMode::Floating);
        }
        Tz::from_str(trimmed)
            .map(TimeZoneMode::Zone)
            .map_err(|_| format!("Unknown time zone: {}", trimmed))
    }
}

impl fmt::Display for TimeZoneMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZoneMode::Utc => f.write_str(DEFAULT_TIME_ZONE),
            TimeZoneMode::Floating => f.write_str(FLOATING_TIME_ZONE),
            TimeZoneMode::Zone(tz) => f.write_str(tz.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.sheet_name, "Sheet1");
        assert_eq!(settings.time_zone_mode(), Ok(TimeZoneMode::Utc));
        assert!(settings.validate().is_ok());
    }

    #[test_case("UTC", TimeZoneMode::Utc ; "utc upper")]
    #[test_case(" utc ", TimeZoneMode::Utc ; "utc padded")]
    #[test_case("floating", TimeZoneMode::Floating ; "floating")]
    #[test_case("Europe/Berlin", TimeZoneMode::Zone(chrono_tz::Europe::Berlin) ; "iana zone")]
    fn test_time_zone_mode_parses(input: &str, expected: TimeZoneMode) {
        assert_eq!(input.parse::<TimeZoneMode>(), Ok(expected));
    }

    #[test]
    fn test_unknown_time_zone_rejected() {
        let settings = Settings {
            time_zone: "Mars/Olympus".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_blank_sheet_name_rejected() {
        let settings = Settings {
            sheet_name: "  ".to_string(),
            ..Settings::default()
        };
        assert_eq!(
            settings.validate(),
            Err("Sheet name cannot be empty".to_string())
        );
    }
}
