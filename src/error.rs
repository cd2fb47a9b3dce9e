//! Error types for the Joyous Menu Editor front-end
//!
//! This module defines all custom error types used throughout the crate.
//! Error types are organized by category for clear error handling and user-friendly messages.

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type encompassing all error categories
#[derive(Error, Debug)]
pub enum AppError {
    /// Translation loading errors
    #[error(transparent)]
    I18n(#[from] I18nError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Translation resource errors
#[derive(Error, Debug)]
pub enum I18nError {
    /// Transport failure or non-success response while fetching a resource
    #[error("Translation resource unavailable for '{locale}': {reason}")]
    ResourceUnavailable { locale: String, reason: String },

    /// Resource could not be read from disk
    #[error("Could not read translation resource: {path}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Payload is not valid JSON
    #[error("Malformed translation resource for '{locale}'")]
    MalformedResource {
        locale: String,
        #[source]
        source: serde_json::Error,
    },

    /// Payload parsed but its root is not an object
    #[error("Translation resource for '{locale}' is not an object")]
    NotAnObject { locale: String },

    /// Locale identifier contains characters that cannot name a resource
    #[error("Invalid locale identifier: {0:?}")]
    InvalidLocale(String),

    /// The default dictionary failed to load, leaving no fallback
    #[error("Default translations '{locale}' could not be loaded")]
    MissingDefault {
        locale: String,
        #[source]
        source: Box<I18nError>,
    },
}

/// Configuration related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Could not load configuration: {path}")]
    LoadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error writing the configuration file
    #[error("Could not save configuration: {path}")]
    SaveError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing configuration
    #[error("Invalid configuration format: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Result type alias for operations that can fail with AppError
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for translation operations
pub type I18nResult<T> = Result<T, I18nError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

impl I18nError {
    /// Create a user-friendly error message suitable for the loading screen
    pub fn user_message(&self) -> String {
        match self {
            I18nError::MissingDefault { .. } => {
                "Unable to load the default language file.".to_string()
            }
            I18nError::ResourceUnavailable { locale, .. } | I18nError::NotAnObject { locale } => {
                format!("Unable to load the language file '{}'.", locale)
            }
            I18nError::MalformedResource { locale, .. } => {
                format!("The language file '{}' is damaged.", locale)
            }
            _ => self.to_string(),
        }
    }
}

impl AppError {
    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            AppError::I18n(err) => err.user_message(),
            AppError::Config(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i18n_error_display() {
        let err = I18nError::ResourceUnavailable {
            locale: "en_us".to_string(),
            reason: "HTTP status 404".to_string(),
        };
        assert!(err.to_string().contains("en_us"));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_missing_default_user_message() {
        let err = I18nError::MissingDefault {
            locale: "zh_cn".to_string(),
            source: Box::new(I18nError::InvalidLocale("../x".to_string())),
        };
        assert!(err.user_message().contains("default language"));
    }

    #[test]
    fn test_app_error_from_i18n_error() {
        let err = I18nError::NotAnObject {
            locale: "zh_cn".to_string(),
        };
        let app_err: AppError = err.into();
        assert!(matches!(app_err, AppError::I18n(_)));
        assert!(app_err.user_message().contains("zh_cn"));
    }
}
