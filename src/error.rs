//! Error types and handling for `TripSmith`

use thiserror::Error;

use crate::providers::ProviderError;

/// Main error type for the `TripSmith` library
#[derive(Error, Debug)]
pub enum TripSmithError {
    /// Configuration-related errors (missing credentials, bad settings).
    /// Fatal: surfaced at client construction, never caught internally.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Provider communication errors
    #[error("Provider error: {source}")]
    Provider {
        #[from]
        source: ProviderError,
    },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Cache operation errors
    #[error("Cache error: {message}")]
    Cache { message: String },
}

impl TripSmithError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new cache error
    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripSmithError::Config { .. } => {
                "Configuration error. Please check your API keys and settings.".to_string()
            }
            TripSmithError::Provider { .. } => {
                "Unable to reach the places provider. Please check your internet connection."
                    .to_string()
            }
            TripSmithError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TripSmithError::Cache { .. } => "Cache operation failed.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TripSmithError::config("missing API key");
        assert!(matches!(config_err, TripSmithError::Config { .. }));

        let validation_err = TripSmithError::validation("days must be positive");
        assert!(matches!(validation_err, TripSmithError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = TripSmithError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let validation_err = TripSmithError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_provider_error_conversion() {
        let provider_err = ProviderError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        let err: TripSmithError = provider_err.into();
        assert!(matches!(err, TripSmithError::Provider { .. }));
    }
}
