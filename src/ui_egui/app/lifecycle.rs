use super::{read_settings, ConverterApp};
use crate::services::settings::SettingsService;
use crate::ui_egui::backend::DesktopBackend;
use std::sync::{Arc, RwLock};

impl ConverterApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings_service = SettingsService::from_default_location();
        let settings = settings_service.get_or_default();
        log::info!(
            "Loaded settings from {}: sheet '{}', time zone {}",
            settings_service.path().display(),
            settings.sheet_name,
            settings.time_zone
        );

        let settings = Arc::new(RwLock::new(settings));
        let backend = Arc::new(DesktopBackend::new(Arc::clone(&settings)));

        Self::with_backend(backend, settings, settings_service)
    }

    pub(super) fn handle_exit(&mut self) {
        if self.worker.is_busy() {
            log::warn!("Exiting while a conversion is still running");
        }

        let settings = read_settings(&self.settings);
        if let Err(err) = self.settings_service.update(&settings) {
            log::error!("Failed to save settings on exit: {:#}", err);
        }
    }
}
