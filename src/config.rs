//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/scribe/config.yaml`

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::toolbar::ToolbarConfig;

/// Editor configuration that persists across sessions.
///
/// Every field has a default, so a partial file loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Text shown while the document is empty
    pub placeholder: String,

    /// Minimum height of the editing surface (CSS length)
    pub height: String,

    /// Plain-text character ceiling (None = unlimited)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    pub read_only: bool,

    pub enable_spell_check: bool,

    /// Toolbar overrides keyed by feature name (e.g. `colors: false`)
    pub toolbar: BTreeMap<String, bool>,

    /// Extra class for the host container
    pub class_name: String,

    pub show_status_bar: bool,

    /// Show the raw markup below the surface
    pub show_html_output: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            placeholder: "Start typing...".to_string(),
            height: "24rem".to_string(),
            max_length: None,
            read_only: false,
            enable_spell_check: true,
            toolbar: BTreeMap::new(),
            class_name: String::new(),
            show_status_bar: true,
            show_html_output: false,
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        Self::load_from(&path).unwrap_or_else(|e| {
            tracing::warn!("{}", e);
            Self::default()
        })
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;

        let config = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to an explicit path
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Resolve the toolbar overrides against the defaults
    pub fn toolbar_config(&self) -> ToolbarConfig {
        ToolbarConfig::resolve(&self.toolbar)
    }
}
