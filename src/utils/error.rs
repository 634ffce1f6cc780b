use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Formatting error: {0}")]
    FormatError(#[from] std::fmt::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("missing input: {path}")]
    MissingInput { path: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl StreamsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StreamsError::IoError(_) | StreamsError::MissingInput { .. } => ErrorCategory::Input,
            StreamsError::TomlError(_)
            | StreamsError::ConfigValidationError { .. }
            | StreamsError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            StreamsError::CsvError(_)
            | StreamsError::SerializationError(_)
            | StreamsError::FormatError(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Input => match self {
                StreamsError::MissingInput { .. } => ErrorSeverity::High,
                _ => ErrorSeverity::Critical,
            },
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            StreamsError::MissingInput { path } => format!("Input file not found: {}", path),
            StreamsError::IoError(e) => format!("Could not read input: {}", e),
            StreamsError::CsvError(e) => format!("Fleet file is not valid CSV: {}", e),
            StreamsError::SerializationError(e) => format!("Could not render report: {}", e),
            StreamsError::FormatError(e) => format!("Could not render report: {}", e),
            StreamsError::TomlError(e) => format!("Config file is not valid TOML: {}", e),
            StreamsError::ConfigValidationError { field, message } => {
                format!("Invalid configuration for {}: {}", field, message)
            }
            StreamsError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StreamsError::MissingInput { .. } => {
                "Check the --input-file / --fleet-file paths, or run from the crate root"
            }
            StreamsError::IoError(_) => "Check file permissions",
            StreamsError::CsvError(_) => "The fleet CSV needs the header id,brand,type,color",
            StreamsError::SerializationError(_) => "Retry without --json",
            StreamsError::FormatError(_) => "Retry with --json",
            StreamsError::TomlError(_) => "Fix the syntax of the [showcase] table",
            StreamsError::ConfigValidationError { .. }
            | StreamsError::InvalidConfigValueError { .. } => "Review the configuration values",
        }
    }
}

pub type Result<T> = std::result::Result<T, StreamsError>;
