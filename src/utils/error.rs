use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimeWordError {
    #[error("Invalid time '{input}': {reason}")]
    InvalidTimeFormat { input: String, reason: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl TimeWordError {
    pub fn invalid_time(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidTimeFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// True when the failure comes from the time being converted rather than
    /// from the environment (files, config, output).
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidTimeFormat { .. })
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_input_error() {
            2
        } else {
            1
        }
    }
}

pub type Result<T> = std::result::Result<T, TimeWordError>;
