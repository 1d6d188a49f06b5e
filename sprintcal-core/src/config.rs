//! Persisted user preferences.
//!
//! A single TOML file at ~/.config/sprintcal/config.toml. The only stored
//! preference today is the theme; it is read once at startup and written
//! on every change.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{CalResult, CalendarError};

/// Color theme of the presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme '{}'. Valid: light, dark", other)),
        }
    }
}

/// User preferences at ~/.config/sprintcal/config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

impl Preferences {
    pub fn config_path() -> CalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalendarError::Config("Could not determine config directory".into()))?
            .join("sprintcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load preferences, creating a commented default config on first run.
    pub fn load() -> CalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| CalendarError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalendarError::Config(e.to_string()))
    }

    /// Save the current preferences to ~/.config/sprintcal/config.toml.
    pub fn save(&self) -> CalResult<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalendarError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| CalendarError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| CalendarError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalResult<()> {
        let contents = "\
# sprintcal configuration

# Color theme (light or dark):
# theme = \"light\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalendarError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalendarError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// The theme to render with: the stored preference, or the default
    /// when none was ever chosen.
    pub fn effective_theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }

    /// Persist an explicit theme choice.
    pub fn set_theme(&mut self, theme: Theme) -> CalResult<()> {
        self.theme = Some(theme);
        self.save()
    }

    /// Flip the effective theme and persist the result.
    pub fn toggle_theme(&mut self) -> CalResult<Theme> {
        let next = self.effective_theme().toggled();
        self.set_theme(next)?;
        Ok(next)
    }
}
