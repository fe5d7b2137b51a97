//! What the converter window shows, and the convert handler behind it.

use crate::ui_egui::backend::{Backend, BackendError};

pub const GUIDANCE_MESSAGE: &str = "Please select input and output paths.";

/// The three strings the converter window shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConverterState {
    pub input_path: String,
    pub output_path: String,
    pub message: String,
}

/// Paths handed to a conversion once both are present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub input_path: String,
    pub output_path: String,
}

impl ConverterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the input path with whatever the picker returned
    pub fn select_file(&mut self, backend: &dyn Backend) {
        self.input_path = backend.select_file();
    }

    /// Replace the output path with whatever the save dialog returned
    pub fn save_file(&mut self, backend: &dyn Backend) {
        self.output_path = backend.save_file();
    }

    /// Check both paths are set. Sets the guidance message and returns
    /// `None` otherwise.
    pub fn prepare_conversion(&mut self) -> Option<ConversionRequest> {
        if self.input_path.is_empty() || self.output_path.is_empty() {
            self.message = GUIDANCE_MESSAGE.to_string();
            return None;
        }

        Some(ConversionRequest {
            input_path: self.input_path.clone(),
            output_path: self.output_path.clone(),
        })
    }

    /// Record the outcome of a conversion
    pub fn apply_result(&mut self, result: Result<String, BackendError>) {
        self.message = match result {
            Ok(message) => message,
            Err(err) => format!("Error: {}", err.message),
        };
    }

    /// Validate, convert and record the result in one step
    pub fn convert(&mut self, backend: &dyn Backend) {
        if let Some(request) = self.prepare_conversion() {
            let result = backend.convert_excel_to_ical(&request.input_path, &request.output_path);
            self.apply_result(result);
        }
    }
}
