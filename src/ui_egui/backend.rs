//! Operations the window calls into: the two file dialogs and the conversion.

use crate::models::settings::Settings;
use crate::services::conversion::{ConversionError, ConversionService};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Conversion successful!";

const EXCEL_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];

/// Failure reported by a backend call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BackendError {
    pub message: String,
}

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<ConversionError> for BackendError {
    fn from(err: ConversionError) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Backend {
    /// Ask for the workbook to convert. Empty when cancelled.
    fn select_file(&self) -> String;

    /// Ask where to write the calendar. Empty when cancelled.
    fn save_file(&self) -> String;

    fn convert_excel_to_ical(
        &self,
        input_path: &str,
        output_path: &str,
    ) -> Result<String, BackendError>;
}

/// Backend using native dialogs and the conversion service
pub struct DesktopBackend {
    settings: Arc<RwLock<Settings>>,
}

impl DesktopBackend {
    pub fn new(settings: Arc<RwLock<Settings>>) -> Self {
        Self { settings }
    }

    fn settings(&self) -> Settings {
        match self.settings.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn remember_directory(&self, chosen: &Path) {
        let Some(parent) = chosen.parent() else {
            return;
        };
        let mut guard = match self.settings.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.last_directory = Some(parent.to_path_buf());
    }

    fn finish_dialog(&self, picked: Option<PathBuf>) -> String {
        match picked {
            Some(path) => {
                self.remember_directory(&path);
                path.to_string_lossy().into_owned()
            }
            None => String::new(),
        }
    }
}

impl Backend for DesktopBackend {
    fn select_file(&self) -> String {
        let settings = self.settings();
        let mut dialog = rfd::FileDialog::new()
            .set_title("Select Excel File")
            .add_filter("Excel Files", EXCEL_EXTENSIONS);
        if let Some(dir) = &settings.last_directory {
            dialog = dialog.set_directory(dir);
        }
        self.finish_dialog(dialog.pick_file())
    }

    fn save_file(&self) -> String {
        let settings = self.settings();
        let mut dialog = rfd::FileDialog::new()
            .set_title("Save iCal File")
            .set_file_name(settings.default_output_name.as_str())
            .add_filter("iCal Files", &["ics"]);
        if let Some(dir) = &settings.last_directory {
            dialog = dialog.set_directory(dir);
        }
        self.finish_dialog(dialog.save_file())
    }

    fn convert_excel_to_ical(
        &self,
        input_path: &str,
        output_path: &str,
    ) -> Result<String, BackendError> {
        let service = ConversionService::from_settings(&self.settings())?;
        match service.convert(Path::new(input_path), Path::new(output_path)) {
            Ok(_) => Ok(SUCCESS_MESSAGE.to_string()),
            Err(err) => {
                log::error!("Conversion of {} failed: {}", input_path, err);
                Err(err.into())
            }
        }
    }
}
