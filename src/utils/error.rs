use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradebookError {
    #[error("Invalid argument `{field}`: {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for `{field}` ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl GradebookError {
    pub fn invalid_argument(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { field, reason } => {
                format!("Invalid input for {}: {}", field, reason)
            }
            Self::IoError(e) => format!("Could not access the data file: {}", e),
            Self::CsvError(e) => format!("Could not read or write student records: {}", e),
            Self::SerializationError(e) => format!("Could not render the report: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value {} is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "Make sure ids, names and subjects are not empty",
            Self::IoError(_) | Self::CsvError(_) => {
                "Check that the data file path exists and is writable"
            }
            Self::SerializationError(_) => "Run again without --json",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Check the configuration file and command line arguments"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GradebookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = GradebookError::invalid_argument("id", "cannot be empty");
        assert_eq!(err.to_string(), "Invalid argument `id`: cannot be empty");
        assert!(err.user_friendly_message().contains("id"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GradebookError = io.into();
        assert!(matches!(err, GradebookError::IoError(_)));
        assert_eq!(
            err.recovery_suggestion(),
            "Check that the data file path exists and is writable"
        );
    }
}
