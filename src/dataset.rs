use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{ObraError, Result};
use crate::models::{Project, RawProject};
use crate::normalize::normalize_record;
use crate::settings::{shellexpand_path, Settings};

/// The catalog that ships with the binary.
pub const BUNDLED_JSON: &str = include_str!("../data/projects.json");
pub const BUNDLED_SOURCE: &str = "bundled";

#[derive(Debug)]
pub struct Dataset {
    pub projects: Vec<Project>,
    /// "bundled" or the path the records came from.
    pub source: String,
    /// sha256 over the raw JSON bytes.
    pub fingerprint: String,
}

pub fn parse_projects(json: &str) -> Result<Vec<Project>> {
    let raw: Vec<RawProject> = serde_json::from_str(json)?;
    Ok(raw.into_iter().map(normalize_record).collect())
}

pub fn load_bundled() -> Result<Dataset> {
    Ok(Dataset {
        projects: parse_projects(BUNDLED_JSON)?,
        source: BUNDLED_SOURCE.to_string(),
        fingerprint: fingerprint(BUNDLED_JSON.as_bytes()),
    })
}

pub fn load_file(path: &Path) -> Result<Dataset> {
    let content = std::fs::read_to_string(path)?;
    let raw: Vec<RawProject> = serde_json::from_str(&content)
        .map_err(|e| ObraError::Dataset(format!("{}: {e}", path.display())))?;
    Ok(Dataset {
        projects: raw.into_iter().map(normalize_record).collect(),
        source: path.display().to_string(),
        fingerprint: fingerprint(content.as_bytes()),
    })
}

/// Resolution order: explicit --data flag, then the settings override,
/// then the bundled catalog.
pub fn load(flag: Option<&str>, settings: &Settings) -> Result<Dataset> {
    if let Some(path) = flag {
        return load_file(Path::new(&shellexpand_path(path)));
    }
    if !settings.dataset_path.is_empty() {
        return load_file(Path::new(&shellexpand_path(&settings.dataset_path)));
    }
    load_bundled()
}

pub fn fingerprint(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
