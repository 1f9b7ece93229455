use crate::domain::errors::DomainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTTP client setup failed: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Storage error: {message}")]
    StorageError { message: String },
}

impl ClientError {
    /// Message suitable for showing to the person at the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ClientError::Domain(e) => e.to_string(),
            ClientError::IoError(e) => format!("Could not access local files: {}", e),
            ClientError::SerializationError(_) => {
                "Received data in an unexpected format".to_string()
            }
            ClientError::HttpClientError(_) => "Could not prepare the HTTP client".to_string(),
            ClientError::ConfigValidationError { field, .. } => {
                format!("Configuration problem in '{}'", field)
            }
            ClientError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            ClientError::StorageError { message } => {
                format!("Could not store session data: {}", message)
            }
        }
    }

    /// The remote failure behind this error, if it is one.
    pub fn domain_error(&self) -> Option<DomainError> {
        match self {
            ClientError::Domain(e) => Some(*e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
