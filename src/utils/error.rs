use crate::core::printer::PrinterError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TourError {
    #[error("Printer error: {0}")]
    Printer(#[from] PrinterError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Background task ended without reporting: {0}")]
    ChannelClosed(#[from] tokio::sync::oneshot::error::RecvError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown tour section: {name}")]
    UnknownSection { name: String },
}

/// 錯誤分類，用於決定處理方式與退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Device,
    Configuration,
    System,
}

impl TourError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TourError::Printer(_) => ErrorCategory::Device,
            TourError::ConfigError { .. }
            | TourError::ConfigValidationError { .. }
            | TourError::InvalidConfigValueError { .. }
            | TourError::UnknownSection { .. } => ErrorCategory::Configuration,
            TourError::IoError(_)
            | TourError::SerializationError(_)
            | TourError::ChannelClosed(_) => ErrorCategory::System,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            TourError::Printer(e) => format!("The printer reported a problem: {}", e),
            TourError::UnknownSection { name } => {
                format!("'{}' is not a section of the tour", name)
            }
            TourError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Device => "Check the printer and send the job again",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
            ErrorCategory::System => "Re-run with --verbose to see more detail",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Device => 2,
            ErrorCategory::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, TourError>;
