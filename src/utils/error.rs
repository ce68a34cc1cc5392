use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlightError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl FlightError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => {
                "Every segment needs both a departure and an arrival timestamp"
            }
            Self::ConfigError { .. } => "Run with --help to see accepted values",
            Self::SerializationError(_) => "Retry with --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, FlightError>;
