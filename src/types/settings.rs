use serde::{Deserialize, Serialize};

use super::window::{ContentSource, WindowConfig};

/// Top-level shell settings container, persisted as `settings.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellSettings {
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub content: ContentSettings,
    #[serde(default = "WindowConfig::main_window_defaults")]
    pub default_window: WindowConfig,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            storage: StorageSettings::default(),
            content: ContentSettings::default(),
            default_window: WindowConfig::main_window_defaults(),
        }
    }
}

/// Where and how window state is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageSettings {
    /// Namespace prepended to every key-value key.
    pub prefix: String,
    /// SQLite file name, relative to the platform data dir unless absolute.
    pub database_file: String,
    /// Purge expired entries once when the shell starts.
    pub sweep_on_startup: bool,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            prefix: "winstate:".to_string(),
            database_file: "winstate.db".to_string(),
            sweep_on_startup: true,
        }
    }
}

/// Renderer content loaded into every new window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContentSettings {
    /// Development server URL; takes precedence over `index_file` when set.
    pub renderer_url: Option<String>,
    pub index_file: String,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            renderer_url: None,
            index_file: "renderer/index.html".to_string(),
        }
    }
}

impl ContentSettings {
    pub fn source(&self) -> ContentSource {
        match self.renderer_url.as_deref() {
            Some(url) if !url.trim().is_empty() => ContentSource::Url(url.to_string()),
            _ => ContentSource::File(self.index_file.clone()),
        }
    }
}
