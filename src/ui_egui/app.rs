mod lifecycle;
mod options;
mod state;
mod view;
mod worker;

use self::options::OptionsDraft;
use crate::models::settings::Settings;
use crate::services::settings::SettingsService;
use std::sync::{Arc, RwLock};

pub use self::state::{ConversionRequest, ConverterState, GUIDANCE_MESSAGE};
pub use self::worker::{ConversionWorker, SharedBackend};

pub struct ConverterApp {
    /// Input path, output path and status message
    state: ConverterState,
    backend: SharedBackend,
    /// Shared with the desktop backend, which reads the conversion options
    settings: Arc<RwLock<Settings>>,
    settings_service: SettingsService,
    options: OptionsDraft,
    worker: ConversionWorker,
}

impl eframe::App for ConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.handle_exit();
    }
}

impl ConverterApp {
    pub fn with_backend(
        backend: SharedBackend,
        settings: Arc<RwLock<Settings>>,
        settings_service: SettingsService,
    ) -> Self {
        let options = OptionsDraft::from_settings(&read_settings(&settings));
        Self {
            state: ConverterState::new(),
            backend,
            settings,
            settings_service,
            options,
            worker: ConversionWorker::new(),
        }
    }

    pub fn state(&self) -> &ConverterState {
        &self.state
    }

    pub fn is_converting(&self) -> bool {
        self.worker.is_busy()
    }

    fn select_input(&mut self) {
        self.state.select_file(self.backend.as_ref());
    }

    fn select_output(&mut self) {
        self.state.save_file(self.backend.as_ref());
    }

    /// Validate the paths and hand the conversion to the worker
    pub fn trigger_convert(&mut self) {
        if self.worker.is_busy() {
            return;
        }
        if let Some(request) = self.state.prepare_conversion() {
            log::info!(
                "Starting conversion {} -> {}",
                request.input_path,
                request.output_path
            );
            self.worker.start(self.backend.clone(), request);
        }
    }

    /// Pick up a finished conversion, if any. Returns `true` when the
    /// message changed.
    pub fn poll_conversion(&mut self) -> bool {
        let Some(result) = self.worker.poll() else {
            return false;
        };
        if let Err(err) = &result {
            log::warn!("Conversion failed: {}", err.message);
        }
        self.state.apply_result(result);
        true
    }

    fn apply_options(&mut self) {
        let mut guard = match self.settings.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if self.options.apply(&mut guard) {
            log::info!(
                "Conversion options set: sheet '{}', time zone {}",
                guard.sheet_name,
                guard.time_zone
            );
        }
    }

    fn reset_options(&mut self) {
        let mut guard = match self.settings.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let last_directory = guard.last_directory.take();
        *guard = Settings {
            last_directory,
            ..Settings::default()
        };
        self.options = OptionsDraft::from_settings(&guard);
    }
}

fn read_settings(settings: &RwLock<Settings>) -> Settings {
    match settings.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}
