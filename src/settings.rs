use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ObraError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_gallery_dir_string")]
    pub gallery_dir: String,
    #[serde(default = "default_outbox_dir_string")]
    pub outbox_dir: String,
    /// Path to an external projects.json; empty means the bundled dataset.
    #[serde(default)]
    pub dataset_path: String,
}

fn default_gallery_dir_string() -> String {
    default_base_dir().join("obras").to_string_lossy().to_string()
}

fn default_outbox_dir_string() -> String {
    default_base_dir().join("outbox").to_string_lossy().to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gallery_dir: default_gallery_dir_string(),
            outbox_dir: default_outbox_dir_string(),
            dataset_path: String::new(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("obra")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

fn default_base_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Documents")
        .join("obra")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| ObraError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

pub fn settings_file_exists() -> bool {
    settings_path().exists()
}

pub fn shellexpand_path(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| PathBuf::from(path))
        .to_string_lossy()
        .to_string()
}
