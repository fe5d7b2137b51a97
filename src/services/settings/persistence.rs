use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::settings::Settings;

pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings from {}", path.display()))?;
    let settings = toml::from_str(&data)
        .with_context(|| format!("failed to parse settings from {}", path.display()))?;
    Ok(settings)
}

pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
    fs::write(path, data)
        .with_context(|| format!("failed to write settings to {}", path.display()))?;
    Ok(())
}
