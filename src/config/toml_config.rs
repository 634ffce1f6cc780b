use crate::config::ShowcaseSettings;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, StreamsError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub showcase: ShowcaseSettings,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StreamsError::MissingInput {
                path: path.display().to_string(),
            },
            _ => StreamsError::IoError(e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn validate_config(&self) -> Result<()> {
        self.showcase.validate()
    }

    pub fn into_settings(self) -> ShowcaseSettings {
        self.showcase
    }
}

impl ConfigProvider for TomlConfig {
    fn brand(&self) -> &str {
        self.showcase.brand()
    }

    fn separator(&self) -> &str {
        self.showcase.separator()
    }

    fn input_file(&self) -> &str {
        self.showcase.input_file()
    }

    fn fleet_file(&self) -> Option<&str> {
        self.showcase.fleet_file()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
