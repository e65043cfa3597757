//! Centralized configuration paths for quill
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/quill-editor/`
//! - Windows: `%APPDATA%\quill-editor\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

const APP_DIR: &str = "quill-editor";

/// Prefix of the daily-rotated log files
pub const LOG_FILE_PREFIX: &str = "quill.log";

/// Base config directory for quill
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/quill-editor`
///   - Else: `~/.config/quill-editor`
///
/// Windows:
///   - `%APPDATA%\quill-editor`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/quill-editor/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/quill-editor/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory {}", path.display()))
}

/// Ensure the base config dir exists, returning it
pub fn ensure_config_dir() -> Result<PathBuf> {
    let dir = config_dir().context("No config directory available")?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = ensure_config_dir()?.join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}

