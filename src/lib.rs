pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{CsvFleet, SampleFleet};
pub use config::{toml_config::TomlConfig, ShowcaseSettings};
pub use self::core::showcase::{Showcase, ShowcaseReport};
pub use domain::model::Car;
pub use utils::error::{Result, StreamsError};
