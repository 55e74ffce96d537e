//! Application settings persistence
//!
//! Handles saving and loading user preferences as pretty-printed JSON in
//! the platform config directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ui::widgets::carousel;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Hero carousel configuration
    #[serde(default)]
    pub hero: HeroSettings,
}

/// Display-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// UI language code ("en" or "fr")
    pub language: String,
    /// Skip animation frames and autoplay to save power
    #[serde(default)]
    pub power_saving_mode: bool,
    /// Switch slides instantly instead of cross-fading
    #[serde(default)]
    pub reduce_motion: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            power_saving_mode: false,
            reduce_motion: false,
        }
    }
}

/// Hero carousel configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroSettings {
    /// Slide image paths; an empty list falls back to the built-in pair
    #[serde(default)]
    pub images: Vec<String>,
    /// Advance slides automatically
    #[serde(default = "default_true")]
    pub autoplay: bool,
    /// Delay between automatic advances
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for HeroSettings {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            autoplay: true,
            interval_ms: carousel::DEFAULT_INTERVAL_MS,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_interval_ms() -> u64 {
    carousel::DEFAULT_INTERVAL_MS
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "arquantix", "Arquantix")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_carousel_contract() {
        let settings = Settings::default();
        assert!(settings.hero.images.is_empty());
        assert!(settings.hero.autoplay);
        assert_eq!(settings.hero.interval_ms, carousel::DEFAULT_INTERVAL_MS);
        assert_eq!(settings.display.language, "en");
        assert!(!settings.display.power_saving_mode);
    }

    #[test]
    fn save_and_load_round_trip() {
        let path = std::env::temp_dir().join("arquantix-settings-test/settings.json");

        let mut settings = Settings::default();
        settings.display.language = "fr".to_string();
        settings.hero.images = vec!["a.jpg".into(), "b.jpg".into()];
        settings.hero.interval_ms = 2000;

        settings.save_to_file(&path).expect("save");
        let loaded = Settings::load_from_file(&path).expect("load");

        assert_eq!(loaded.display.language, "fr");
        assert_eq!(loaded.hero.images, settings.hero.images);
        assert_eq!(loaded.hero.interval_ms, 2000);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").expect("parse");
        assert!(settings.hero.autoplay);
        assert_eq!(settings.hero.interval_ms, carousel::DEFAULT_INTERVAL_MS);

        let settings: Settings =
            serde_json::from_str(r#"{"hero": {"images": ["x.jpg"]}}"#).expect("parse");
        assert_eq!(settings.hero.images, vec!["x.jpg"]);
        assert!(settings.hero.autoplay);
    }

    #[test]
    fn load_from_missing_file_is_an_io_error() {
        let err = Settings::load_from_file(Path::new("/nonexistent/settings.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
