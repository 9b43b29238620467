//! Serializer configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! [serialize]
//! aggs_key = "aggregations"
//! pretty = true
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DslConfig {
    #[serde(default)]
    pub serialize: SerializeConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SerializeConfig {
    /// Key sub-aggregations are nested under
    #[serde(default)]
    pub aggs_key: AggsKey,
    /// Pretty-print rendered documents
    #[serde(default)]
    pub pretty: bool,
}

/// Both spellings are accepted by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AggsKey {
    #[default]
    Aggs,
    Aggregations,
}

impl AggsKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggsKey::Aggs => "aggs",
            AggsKey::Aggregations => "aggregations",
        }
    }
}

impl DslConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse DSL config")
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!("Loaded DSL config from {:?}", path);
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
