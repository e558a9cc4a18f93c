use crate::error::{CataError, Result};
use crate::insights::DEFAULT_MODEL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for cata, stored in config.json next to the journal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CataConfig {
    /// Generative model used for tasting insights.
    #[serde(default = "default_insights_model")]
    pub insights_model: String,
}

fn default_insights_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for CataConfig {
    fn default() -> Self {
        Self {
            insights_model: default_insights_model(),
        }
    }
}

impl CataConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CataError::Io)?;
        let config: CataConfig =
            serde_json::from_str(&content).map_err(CataError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CataError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CataError::Serialization)?;
        fs::write(config_path, content).map_err(CataError::Io)?;
        Ok(())
    }
}
