pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::domain::sample::VOLKSWAGEN;
use crate::utils::error::{Result, StreamsError};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SEPARATOR: &str = ";";
pub const DEFAULT_INPUT_FILE: &str = "data/inputfile.txt";

fn default_brand() -> String {
    VOLKSWAGEN.to_string()
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_input_file() -> String {
    DEFAULT_INPUT_FILE.to_string()
}

/// 最終生效的設定，不論來源是命令列還是 TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseSettings {
    #[serde(default = "default_brand")]
    pub brand: String,
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_input_file")]
    pub input_file: String,
    #[serde(default)]
    pub fleet_file: Option<String>,
}

impl Default for ShowcaseSettings {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            separator: default_separator(),
            input_file: default_input_file(),
            fleet_file: None,
        }
    }
}

impl ConfigProvider for ShowcaseSettings {
    fn brand(&self) -> &str {
        &self.brand
    }

    fn separator(&self) -> &str {
        &self.separator
    }

    fn input_file(&self) -> &str {
        &self.input_file
    }

    fn fleet_file(&self) -> Option<&str> {
        self.fleet_file.as_deref()
    }
}

impl Validate for ShowcaseSettings {
    fn validate(&self) -> Result<()> {
        // 空字串分隔符是合法的，join 會直接串接
        validate_non_empty_string("brand", &self.brand)?;
        validate_path("input_file", &self.input_file)?;
        if let Some(fleet_file) = &self.fleet_file {
            validate_path("fleet_file", fleet_file)?;
            if fleet_file == &self.input_file {
                return Err(StreamsError::ConfigValidationError {
                    field: "fleet_file".to_string(),
                    message: format!(
                        "'{}' is also the input_file; the fleet CSV and the text input must differ",
                        fleet_file
                    ),
                });
            }
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::{ShowcaseSettings, DEFAULT_INPUT_FILE, DEFAULT_SEPARATOR};
    use crate::config::toml_config::TomlConfig;
    use crate::domain::sample::VOLKSWAGEN;
    use crate::utils::error::Result;
    use crate::utils::validation::Validate;
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "car-streams")]
    #[command(about = "Iterator transforms demonstrated over a small car fleet")]
    pub struct CliConfig {
        #[arg(long, default_value = VOLKSWAGEN, help = "Brand used by the filter examples")]
        pub brand: String,

        #[arg(long, default_value = DEFAULT_SEPARATOR, help = "Separator for the join example")]
        pub separator: String,

        #[arg(long, default_value = DEFAULT_INPUT_FILE, help = "Text file for the read-lines example")]
        pub input_file: String,

        #[arg(long, help = "CSV fleet (id,brand,type,color); built-in sample when omitted")]
        pub fleet_file: Option<String>,

        #[arg(long, help = "TOML config file; replaces the flags above")]
        pub config: Option<String>,

        #[arg(long, help = "Print the report as JSON")]
        pub json: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub log_json: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        /// TOML 設定優先於命令列參數
        pub fn resolve(&self) -> Result<ShowcaseSettings> {
            let settings = match &self.config {
                Some(path) => {
                    tracing::debug!("Loading config from {}", path);
                    TomlConfig::from_file(path)?.into_settings()
                }
                None => ShowcaseSettings {
                    brand: self.brand.clone(),
                    separator: self.separator.clone(),
                    input_file: self.input_file.clone(),
                    fleet_file: self.fleet_file.clone(),
                },
            };
            settings.validate()?;
            Ok(settings)
        }
    }

}
