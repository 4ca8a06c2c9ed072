//! Error types and handling for the `wattcast` library

use thiserror::Error;

/// Main error type for the `wattcast` library
#[derive(Error, Debug)]
pub enum WattcastError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Weather service communication errors
    #[error("Weather lookup failed: {message}")]
    WeatherFetch { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl WattcastError {
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

    /// Create a new weather fetch error
    pub fn weather_fetch<S: Into<String>>(message: S) -> Self {
        Self::WeatherFetch {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WattcastError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            WattcastError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            WattcastError::WeatherFetch { message } => message.clone(),
            WattcastError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
