use serde::{Deserialize, Serialize};

use crate::models::FontSize;

/// User preferences persisted in `configuration.json`. Unknown or missing
/// fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Text size the reader starts with.
    pub font_size: FontSize,
    /// Show the "Chapter X of N" footer in the reader.
    pub show_progress_footer: bool,
    /// Show the key-hint bar at the bottom of every view.
    pub show_hint_bar: bool,
}

impl Settings {
    pub fn merge(&mut self, other: Self) {
        self.font_size = other.font_size;
        self.show_progress_footer = other.show_progress_footer;
        self.show_hint_bar = other.show_hint_bar;
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_size: FontSize::Medium,
            show_progress_footer: true,
            show_hint_bar: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.font_size, FontSize::Medium);
        assert!(settings.show_progress_footer);
        assert!(settings.show_hint_bar);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"font_size":"large"}"#).unwrap();
        assert_eq!(settings.font_size, FontSize::Large);
        assert!(settings.show_progress_footer);
    }

    #[test]
    fn test_round_trip() {
        let mut settings = Settings::default();
        settings.font_size = FontSize::Small;
        settings.show_hint_bar = false;
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_merge_overwrites() {
        let mut base = Settings::default();
        let other = Settings {
            font_size: FontSize::Large,
            show_progress_footer: false,
            show_hint_bar: false,
        };
        base.merge(other.clone());
        assert_eq!(base, other);
    }
}
