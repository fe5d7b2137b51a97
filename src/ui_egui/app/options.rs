use crate::models::settings::{Settings, TimeZoneMode};

/// Editable copy of the conversion options shown in the window
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsDraft {
    pub sheet_name: String,
    pub time_zone: String,
    pub error: Option<String>,
}

impl OptionsDraft {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            sheet_name: settings.sheet_name.clone(),
            time_zone: settings.time_zone.clone(),
            error: None,
        }
    }

    pub fn is_dirty(&self, settings: &Settings) -> bool {
        self.sheet_name != settings.sheet_name || self.time_zone != settings.time_zone
    }

    /// Copy the draft into `settings` if it is valid. On error `settings` is
    /// left untouched and the reason kept in `self.error`.
    pub fn apply(&mut self, settings: &mut Settings) -> bool {
        let sheet_name = self.sheet_name.trim();
        if sheet_name.is_empty() {
            self.error = Some("Sheet name cannot be empty".to_string());
            return false;
        }

        let time_zone = match self.time_zone.parse::<TimeZoneMode>() {
            Ok(mode) => mode,
            Err(err) => {
                self.error = Some(err);
                return false;
            }
        };

        settings.sheet_name = sheet_name.to_string();
        settings.time_zone = time_zone.to_string();
        *self = Self::from_settings(settings);
        true
    }
}
