//! Game settings and preferences
//!
//! Persisted as JSON next to the binary, separately from any game state.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Player preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Show the goal-synthesis trace (cheat mode)
    pub trace_enabled: bool,
    /// Fixed RNG seed; None seeds from entropy each run
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trace_enabled: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults if the file is
    /// missing or malformed.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_defaults() {
        let settings = Settings::load(Path::new("/nonexistent/four-fold.json"));
        assert!(!settings.trace_enabled);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_save_load_round_trip() {
        let path = std::env::temp_dir().join("four-fold-settings-test.json");
        let settings = Settings {
            trace_enabled: true,
            seed: Some(42),
        };
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path);
        assert!(loaded.trace_enabled);
        assert_eq!(loaded.seed, Some(42));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_file_defaults() {
        let path = std::env::temp_dir().join("four-fold-settings-bad.json");
        std::fs::write(&path, "{not json").unwrap();

        let loaded = Settings::load(&path);
        assert!(!loaded.trace_enabled);

        let _ = std::fs::remove_file(&path);
    }
}
