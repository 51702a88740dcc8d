//! Error types for option configuration

use lzplug_types::Error as CodecError;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("I/O error reading config file '{path}': {source}")]
    Io {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Configuration source could not be parsed
    #[error("Failed to parse configuration: {message}")]
    Parse {
        /// Error message
        message: String,
    },

    /// Option key not recognized by the codec
    #[error("Unknown option '{key}'")]
    UnknownOption {
        /// Option key
        key: String,
    },

    /// Option value rejected by the codec
    #[error("Invalid value '{value}' for option '{key}'")]
    InvalidValue {
        /// Option key
        key: String,
        /// Rejected value
        value: String,
    },

    /// Configuration names a different codec than the one being configured
    #[error("Configuration is for codec '{configured}', not '{codec}'")]
    CodecMismatch {
        /// Codec named by the configuration
        configured: String,
        /// Codec being configured
        codec: String,
    },

    /// `key=value` entry without a key or `=`
    #[error("Malformed option pair '{pair}', expected key=value")]
    MalformedPair {
        /// Offending entry
        pair: String,
    },

    /// Serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message
        message: String,
    },

    /// Generic configuration error
    #[error("Configuration error: {message}")]
    Other {
        /// Error message
        message: String,
    },
}

impl From<toml::de::Error> for ConfigError {
    fn from(error: toml::de::Error) -> Self {
        Self::Parse {
            message: error.to_string(),
        }
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(error: toml::ser::Error) -> Self {
        Self::Serialization {
            message: error.to_string(),
        }
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(error: config::ConfigError) -> Self {
        Self::Parse {
            message: error.to_string(),
        }
    }
}

impl From<CodecError> for ConfigError {
    fn from(error: CodecError) -> Self {
        match error {
            CodecError::BadParam { key } => Self::UnknownOption { key },
            CodecError::BadValue { key, value } => Self::InvalidValue { key, value },
            other => Self::Other {
                message: other.to_string(),
            },
        }
    }
}

impl From<ConfigError> for CodecError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::UnknownOption { key } => CodecError::bad_param(key),
            ConfigError::InvalidValue { key, value } => CodecError::bad_value(key, value),
            ConfigError::CodecMismatch { configured, .. } => CodecError::unable_to_load(configured),
            other => CodecError::failed(other.to_string()),
        }
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create a new malformed pair error
    pub fn malformed_pair<S: Into<String>>(pair: S) -> Self {
        Self::MalformedPair { pair: pair.into() }
    }

    /// Create a new other error
    pub fn other<S: Into<String>>(message: S) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}
