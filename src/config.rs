use crate::style::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration. Read once at startup, never written back.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub editor: EditorConfig,
    pub theme: ThemeConfig,
    pub window: WindowConfig,
    pub panel: PanelConfig,
}

/// External text editor used by the Edit action
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    /// Binary name, looked up on PATH
    pub program: String,
    /// Extra arguments placed before the file path
    pub args: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub mode: Theme,
}

/// Initial window size (in points)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PanelConfig {
    /// Width of the pinned-directories side panel (in pixels)
    pub pinned_width: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            program: "nano".to_string(),
            args: Vec::new(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 1000.0,
            height: 600.0,
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            pinned_width: 180.0,
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "sgfm")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location, or defaults if there is none
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Config::default(),
        }
    }

    /// Load configuration from `path`, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                log::warn!("Failed to read config file {}: {}", path.display(), e);
                return Config::default();
            }
        };
        match toml::from_str::<Config>(&contents) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file {}: {}", path.display(), e);
                Config::default()
            }
        }
    }
}
