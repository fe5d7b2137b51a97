//! Settings persistence (TOML file in the platform config directory).

mod persistence;
mod service;

pub use persistence::{load_settings, save_settings};
pub use service::SettingsService;
