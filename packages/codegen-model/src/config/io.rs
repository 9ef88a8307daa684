//! Configuration I/O (YAML/JSON loading)

use std::path::Path;

use super::error::ConfigResult;
use super::generation_config::{GenerationConfig, ValidatedConfig};

impl GenerationConfig {
    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<ValidatedConfig> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML; missing fields take their defaults
    pub fn from_yaml_str(content: &str) -> ConfigResult<ValidatedConfig> {
        let config: GenerationConfig = serde_yaml::from_str(content)?;
        config.validated()
    }

    pub fn from_json_str(content: &str) -> ConfigResult<ValidatedConfig> {
        let config: GenerationConfig = serde_json::from_str(content)?;
        config.validated()
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl ValidatedConfig {
    pub fn to_yaml(&self) -> ConfigResult<String> {
        self.as_inner().to_yaml()
    }
}
