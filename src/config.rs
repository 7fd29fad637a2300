use std::{fs, path::PathBuf};

use eyre::Result;

use crate::settings::Settings;

/// On-disk configuration. Only preferences live here; the UI selection
/// state (current page, chapter, query, tab) is session-only and never
/// written anywhere.
#[derive(Debug, Clone)]
pub struct Config {
    pub settings: Settings,
    filepath: PathBuf,
}

impl Config {
    /// Load from the default location, writing a default file on first run.
    pub fn new() -> Result<Self> {
        let prefix = get_app_data_prefix()?;
        Self::load_from(prefix.join("configuration.json"))
    }

    /// Load configuration from a custom path.
    pub fn load_from(filepath: PathBuf) -> Result<Self> {
        let mut settings = Settings::default();

        if filepath.exists() {
            let config_str = fs::read_to_string(&filepath)?;
            // A malformed file is ignored rather than fatal; the reader
            // still starts with defaults.
            if let Ok(user_settings) = serde_json::from_str::<Settings>(&config_str) {
                settings.merge(user_settings);
            }
        } else {
            if let Some(parent) = filepath.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&filepath, serde_json::to_string_pretty(&settings)?)?;
        }

        Ok(Self { settings, filepath })
    }

    /// Save current configuration to file.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.filepath.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.filepath, serde_json::to_string_pretty(&self.settings)?)?;
        Ok(())
    }

    pub fn path(&self) -> &PathBuf {
        &self.filepath
    }
}

pub fn get_app_data_prefix() -> Result<PathBuf> {
    if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(config_home).join("threshold"));
    } else if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".config").join("threshold"));
    } else if let Some(user_profile) = std::env::var_os("USERPROFILE") {
        return Ok(PathBuf::from(user_profile).join(".threshold"));
    }

    Err(eyre::eyre!("Could not determine application data directory"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FontSize;
    use tempfile::tempdir;

    #[test]
    fn test_first_run_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("configuration.json");
        assert!(!path.exists());

        let config = Config::load_from(path.clone()).unwrap();
        assert!(path.exists());
        assert_eq!(config.settings, Settings::default());
    }

    #[test]
    fn test_existing_file_is_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("configuration.json");
        fs::write(&path, r#"{"font_size":"large","show_hint_bar":false}"#).unwrap();

        let config = Config::load_from(path).unwrap();
        assert_eq!(config.settings.font_size, FontSize::Large);
        assert!(!config.settings.show_hint_bar);
        // Missing field keeps its default.
        assert!(config.settings.show_progress_footer);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("configuration.json");
        fs::write(&path, "{ this is not json").unwrap();

        let config = Config::load_from(path).unwrap();
        assert_eq!(config.settings, Settings::default());
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("configuration.json");

        let mut config = Config::load_from(path.clone()).unwrap();
        config.settings.font_size = FontSize::Small;
        config.save().unwrap();

        let reloaded = Config::load_from(path).unwrap();
        assert_eq!(reloaded.settings.font_size, FontSize::Small);
    }
}
