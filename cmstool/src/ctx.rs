//! Application context and state management.
//!
//! [`AppContext`] holds everything a subcommand needs: the loaded
//! configuration, the section registry and the renderer factory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use herosection::{SectionFactory, SectionRegistry, registry::SectionConfig};
use serde_json::Value;

use crate::config::CmsConfig;

/// The central state container for cmstool operations.
pub struct AppContext {
    /// Directory the tool was invoked in.
    pub workspace: PathBuf,
    pub config: CmsConfig,
    pub registry: SectionRegistry,
    pub factory: SectionFactory,
}

impl AppContext {
    /// Builds the context: loads `.cmstool.toml` (or the explicit config
    /// path) and the builtin catalogue.
    pub async fn new(config_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let workspace = std::env::current_dir()?;
        let config_path = config_path.unwrap_or_else(|| workspace.join(CmsConfig::FILE_NAME));
        let config = CmsConfig::load(&config_path)
            .await
            .with_context(|| format!("Failed to load {}", config_path.display()))?;
        Ok(Self {
            workspace,
            config,
            registry: SectionRegistry::builtin(),
            factory: SectionFactory::new(),
        })
    }

    /// Looks up a registry entry, with known ids in the error message.
    pub fn entry(&self, id: &str) -> anyhow::Result<&SectionConfig> {
        self.registry.get(id).ok_or_else(|| {
            let known = self
                .registry
                .entries()
                .iter()
                .map(|e| e.id.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            anyhow!("unknown section `{id}` (known: {known})")
        })
    }

    /// Reads a stored section property file (JSON or TOML).
    pub async fn read_props(&self, path: &Path) -> anyhow::Result<Value> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
        formedit::run::parse_props(&content, ext)
    }

    /// Writes an artifact under the configured output directory and
    /// returns its path.
    pub async fn write_output(&self, name: &str, content: &str) -> anyhow::Result<PathBuf> {
        let dir = self.workspace.join(&self.config.output.dir);
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        let path = dir.join(name);
        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}
