use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default configuration file name, looked up in the scan directory.
pub const DEFAULT_CONFIG_FILE: &str = "exporter.json";

/// Destination settings for the finished payload.
///
/// The recognized options mirror what the object-storage deployment needs:
/// a project identifier, a bucket name, and the path to a credentials file.
/// Credentials are passed through to the storage client untouched; this
/// crate never reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(rename = "projectId")]
    pub project_id: String,
    #[serde(rename = "bucketName")]
    pub bucket_name: String,
    #[serde(rename = "credentialsPath")]
    pub credentials_path: PathBuf,
}

impl ExportConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}
