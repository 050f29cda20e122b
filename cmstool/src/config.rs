//! Tool configuration.
//!
//! Loaded from `.cmstool.toml` in the working directory. Every field has a
//! default, so the tool works without a configuration file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// CMS API access configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the CMS API (`https://cms.example.com`). Navigation
    /// fetching is skipped when unset.
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: 10,
        }
    }
}

/// Where rendered artifacts are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("out"),
        }
    }
}

/// Complete tool configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CmsConfig {
    pub api: ApiConfig,
    pub output: OutputConfig,
}

impl CmsConfig {
    pub const FILE_NAME: &'static str = ".cmstool.toml";

    /// Loads the configuration file, falling back to defaults when it does
    /// not exist.
    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => {
                let config = toml::from_str(&content)?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: CmsConfig = toml::from_str("[api]\nbase_url = \"https://cms.local\"\n").unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("https://cms.local"));
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.output.dir, PathBuf::from("out"));
    }
}
