//! Error types and handling for `AgriSphere`

use thiserror::Error;

/// Main error type for the `AgriSphere` application
#[derive(Error, Debug)]
pub enum AgriSphereError {
    /// Transport failures, non-OK responses and undecodable bodies
    #[error("Network error: {message}")]
    Network { message: String },

    /// The geocoder answered with an empty result set
    #[error("Location not found: {query}")]
    NotFound { query: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl AgriSphereError {
    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new not-found error for a search query
    pub fn not_found<S: Into<String>>(query: S) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AgriSphereError::Network { .. } => {
                "Unable to reach the data services. Please check your internet connection."
                    .to_string()
            }
            AgriSphereError::NotFound { .. } => {
                "Location not found. Please try a different search term.".to_string()
            }
            AgriSphereError::Validation { message } => message.clone(),
            AgriSphereError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            AgriSphereError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for AgriSphereError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::network(format!("Undecodable response body: {err}"))
        } else {
            Self::network(err.to_string())
        }
    }
}
