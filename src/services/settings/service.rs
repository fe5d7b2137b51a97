use crate::models::settings::Settings;
use anyhow::{anyhow, Result};
#[cfg(not(debug_assertions))]
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use super::persistence::{load_settings, save_settings};

const SETTINGS_FILE: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service backed by `settings.toml` in the platform config directory.
    ///
    /// Debug builds keep the file in the working directory.
    pub fn from_default_location() -> Self {
        Self::new(default_settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the stored settings, or defaults if none were saved yet
    pub fn get(&self) -> Result<Settings> {
        let settings = load_settings(&self.path)?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;
        Ok(settings)
    }

    /// Get the stored settings, falling back to defaults on any error
    pub fn get_or_default(&self) -> Settings {
        match self.get() {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Using default settings: {:#}", err);
                Settings::default()
            }
        }
    }

    /// Update settings
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;
        save_settings(&self.path, settings)?;
        log::info!("Saved settings to {}", self.path.display());
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        self.update(&Settings::default())
    }
}

fn default_settings_path() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(SETTINGS_FILE)
    }

    #[cfg(not(debug_assertions))]
    {
        if let Some(proj_dirs) = ProjectDirs::from("com", "ExcelToICal", "ExcelToICal") {
            proj_dirs.config_dir().join(SETTINGS_FILE)
        } else {
            PathBuf::from(SETTINGS_FILE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn setup_test_service() -> (tempfile::TempDir, SettingsService) {
        let temp_dir = tempfile::tempdir().unwrap();
        let service = SettingsService::new(temp_dir.path().join("nested").join(SETTINGS_FILE));
        (temp_dir, service)
    }

    #[test]
    fn test_get_default_settings() {
        let (_dir, service) = setup_test_service();
        let settings = service.get().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_update_settings() {
        let (_dir, service) = setup_test_service();

        let mut settings = service.get().unwrap();
        settings.sheet_name = "Roster".to_string();
        settings.time_zone = "Europe/Berlin".to_string();
        settings.last_directory = Some(PathBuf::from("/tmp/schedules"));
        service.update(&settings).unwrap();

        let loaded = service.get().unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_update_rejects_invalid() {
        let (_dir, service) = setup_test_service();
        let settings = Settings {
            sheet_name: String::new(),
            ..Settings::default()
        };
        assert!(service.update(&settings).is_err());
        assert!(!service.path().exists());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let (_dir, service) = setup_test_service();
        std::fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        std::fs::write(service.path(), "sheet_name = \"Roster\"\n").unwrap();

        let settings = service.get().unwrap();
        assert_eq!(settings.sheet_name, "Roster");
        assert_eq!(settings.time_zone, "UTC");
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let (_dir, service) = setup_test_service();
        std::fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        std::fs::write(service.path(), "sheet_name = [").unwrap();

        assert!(service.get().is_err());
        assert_eq!(service.get_or_default(), Settings::default());
    }

    #[test]
    fn test_reset() {
        let (_dir, service) = setup_test_service();
        let settings = Settings {
            sheet_name: "Roster".to_string(),
            ..Settings::default()
        };
        service.update(&settings).unwrap();
        service.reset().unwrap();
        assert_eq!(service.get().unwrap(), Settings::default());
    }
}
