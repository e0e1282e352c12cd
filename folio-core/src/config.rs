use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::engine::DEFAULT_REVEAL;
use crate::i18n::Locale;
use crate::loader::RecordSource;

pub const APP_DIR: &str = "folio";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub source: RecordSource,
    pub profile: ProfileConfig,
    pub theme: ThemeConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub headline: String,
    pub email: String,
    pub links: Vec<ProfileLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub background_color: [u8; 3],
    pub panel_color: [u8; 3],
    pub accent_color: [u8; 3],
    pub text_color: [u8; 3],
    pub secondary_text_color: [u8; 3],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub initial_reveal: usize,
    pub default_locale: Locale,
    pub font_size: f32,
    pub window_size: [f32; 2],
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Portfolio".to_string(),
            headline: "Frontend Developer".to_string(),
            email: String::new(),
            links: Vec::new(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background_color: [30, 30, 30],
            panel_color: [37, 37, 38],
            accent_color: [0, 122, 204],
            text_color: [204, 204, 204],
            secondary_text_color: [150, 150, 150],
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            initial_reveal: DEFAULT_REVEAL,
            default_locale: Locale::En,
            font_size: 14.0,
            window_size: [900.0, 800.0],
        }
    }
}

impl AppConfig {
    /// `<config_dir>/folio`, or the working directory when the platform has none.
    pub fn config_dir() -> PathBuf {
        let mut dir = dirs::config_dir()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_default();
        dir.push(APP_DIR);
        dir
    }

    pub fn config_file_path() -> PathBuf {
        Self::config_dir().join("config.json")
    }

    /// Loads the configuration, writing defaults when the file is missing or invalid.
    pub fn load() -> Self {
        Self::load_or_init(Self::config_file_path())
    }

    pub fn load_or_init(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, path = %path.display(), "could not load configuration, using defaults");
                let default_config = Self::default();
                if let Err(save_err) = default_config.save_to(path) {
                    warn!(error = %save_err, "could not save default configuration");
                }
                default_config
            }
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let config_content = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&config_content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let config_json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, config_json)?;
        Ok(())
    }
}
