use serde::{
    Deserialize,
    Serialize,
};

use crate::persistence;

pub const SETTINGS_FILE: &str = "settings.json";
pub const DEFAULT_DATA_URL: &str = "data/data.json";

/// Persisted app settings. `data_url` may be an `http(s)` URL or a local
/// path to the job document.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub data_url: String,
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { data_url: DEFAULT_DATA_URL.to_string(), dark_mode: false }
    }
}

impl SettingsData {
    pub fn load() -> Self {
        persistence::load_json_or_default(SETTINGS_FILE)
    }

    pub fn save(&self) {
        if let Err(e) = persistence::save_json(self, SETTINGS_FILE) {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_bundled_document() {
        let settings = SettingsData::default();
        assert_eq!(settings.data_url, "data/data.json");
        assert!(!settings.dark_mode);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let settings: SettingsData = serde_json::from_str("{\"dark_mode\": true}").unwrap();
        assert_eq!(settings.data_url, DEFAULT_DATA_URL);
        assert!(settings.dark_mode);
    }
}
