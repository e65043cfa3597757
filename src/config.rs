//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/quill-editor/config.yaml`

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Allow secondary clicks to add cursors and selections
    #[serde(default = "default_true")]
    pub multi_cursor: bool,

    /// Keep the restyled text selected after bold/italic toggles.
    /// When false the selection collapses to a caret after it.
    #[serde(default = "default_true")]
    pub reselect_after_style: bool,
}

fn default_true() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            multi_cursor: true,
            reselect_after_style: true,
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

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Read and parse a config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// Save config to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
