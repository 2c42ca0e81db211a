use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("Table format not recognized after {attempts} parse attempts")]
    TableFormatError { attempts: usize },

    #[error("Invalid config value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },
}

/// 錯誤嚴重程度，決定 CLI 的退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Parse,
    Config,
    Output,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::CsvError(_) => ErrorCategory::Parse,
            ConvertError::IoError(_) => ErrorCategory::Output,
            ConvertError::SerializationError(_) => ErrorCategory::Output,
            ConvertError::InputNotFound { .. } => ErrorCategory::Input,
            ConvertError::TableFormatError { .. } => ErrorCategory::Parse,
            ConvertError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            ConvertError::ConfigValidationError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ConvertError::CsvError(_) => ErrorSeverity::High,
            ConvertError::IoError(_) => ErrorSeverity::Critical,
            ConvertError::SerializationError(_) => ErrorSeverity::High,
            ConvertError::InputNotFound { .. } => ErrorSeverity::High,
            ConvertError::TableFormatError { .. } => ErrorSeverity::High,
            ConvertError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            ConvertError::ConfigValidationError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ConvertError::CsvError(_) => {
                "Check that the input file is a well-formed delimited table".to_string()
            }
            ConvertError::IoError(_) => {
                "Check file permissions and available disk space".to_string()
            }
            ConvertError::SerializationError(_) => {
                "Check that the report path is writable".to_string()
            }
            ConvertError::InputNotFound { path } => format!(
                "Place the source table at '{}' or pass --input with its location",
                path
            ),
            ConvertError::TableFormatError { .. } => {
                "The table needs at least 8 columns separated by ';', ',' or tab".to_string()
            }
            ConvertError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' and try again", field)
            }
            ConvertError::ConfigValidationError { field, .. } => {
                format!("Review the '{}' section of the configuration", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::CsvError(e) => format!("The input table could not be parsed: {}", e),
            ConvertError::IoError(e) => format!("A file operation failed: {}", e),
            ConvertError::SerializationError(e) => {
                format!("The run report could not be written: {}", e)
            }
            ConvertError::InputNotFound { path } => {
                format!("The input file '{}' does not exist", path)
            }
            ConvertError::TableFormatError { attempts } => format!(
                "No supported encoding/delimiter combination produced a usable table ({} combinations tried)",
                attempts
            ),
            ConvertError::InvalidConfigValueError { field, reason, .. } => {
                format!("The configuration value '{}' is invalid: {}", field, reason)
            }
            ConvertError::ConfigValidationError { field, message } => {
                format!("The configuration '{}' is invalid: {}", field, message)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
