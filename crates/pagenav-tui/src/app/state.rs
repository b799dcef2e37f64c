//! Application state types.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::theme::ThemeVariant;

/// Application mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Normal,
    /// The jump input has focus.
    Jumping,
    Help,
    Quit,
}

/// Status line message shown after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub success: bool,
    pub text: String,
    /// Ticks left before the message is cleared.
    pub ticks_left: u32,
}

/// Persisted user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Theme used at startup.
    pub theme: ThemeVariant,
    /// Number of page links in the bar.
    pub nav_page_number: u32,
    /// Records per page.
    pub page_size: u64,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::Dark,
            nav_page_number: 10,
            page_size: 20,
        }
    }
}

impl UserSettings {
    /// Get the config file path.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("pagenav").join("settings.toml"))
    }

    /// Load settings from disk, or return defaults.
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load settings from a file, or return defaults if it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save settings to disk.
    pub fn save(&self) -> std::io::Result<()> {
        let path = Self::config_path().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "No config directory")
        })?;
        self.save_to(&path)
    }

    /// Save settings to a file, creating its directory.
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        std::fs::write(path, content)
    }
}
