// reads the tool document from disk, no interpretation beyond the yaml shape
use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{error, info};

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// The document as written: `tools.<category>.{enabled, tools}`.
///
/// Category keys stay strings here so unknown ones can be reported by the
/// validator instead of failing the parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfig {
    #[serde(default)]
    pub tools: Option<BTreeMap<String, RawCategory>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCategory {
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub tools: Option<Vec<String>>,
}

impl RawConfig {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let parsed: Option<RawConfig> = serde_yaml::from_str(content)?;
        Ok(parsed.unwrap_or_default())
    }
}

pub fn load(path: &Path) -> Result<RawConfig, ConfigError> {
    if !path.exists() {
        error!(path = %path.display(), "config file not found");
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config = RawConfig::parse(&content).inspect_err(|e| error!("{}", e))?;
    info!(path = %path.display(), "configuration loaded");
    Ok(config)
}
