//! Error types and handling for codec operations
//!
//! Every failing codec operation returns an [`Error`]. Each variant maps to exactly
//! one non-OK [`Status`], so a host framework can always recover the flat status
//! code while Rust callers keep the context (key, value, capacity).

use crate::Status;

/// Error severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Low severity - expected condition, the caller adjusts and continues
    Low,
    /// Medium severity - this call failed, other calls are unaffected
    Medium,
    /// High severity - the caller's configuration or setup is wrong
    High,
}

/// Main error type for codec operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// Compression or decompression failed
    #[error("Codec operation failed: {message}")]
    Failed {
        /// Error message describing the failure
        message: String,
    },

    /// Output capacity was insufficient
    #[error("Output buffer full: {capacity} bytes were not enough")]
    BufferFull {
        /// Capacity of the output buffer that was offered
        capacity: usize,
    },

    /// Unrecognized configuration key
    #[error("Invalid parameter: '{key}'")]
    BadParam {
        /// Key that is not recognized by the codec
        key: String,
    },

    /// Recognized configuration key with an invalid value
    #[error("Invalid value '{value}' for parameter '{key}'")]
    BadValue {
        /// Configuration key
        key: String,
        /// Rejected value
        value: String,
    },

    /// Codec is not provided by this plugin
    #[error("Unable to load codec '{codec}'")]
    UnableToLoad {
        /// Name of the requested codec
        codec: String,
    },
}

impl Error {
    /// Get the framework status code for this error
    pub fn status(&self) -> Status {
        match self {
            Self::Failed { .. } => Status::Failed,
            Self::BufferFull { .. } => Status::BufferFull,
            Self::BadParam { .. } => Status::BadParam,
            Self::BadValue { .. } => Status::BadValue,
            Self::UnableToLoad { .. } => Status::UnableToLoad,
        }
    }

    /// Get the error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::BufferFull { .. } => ErrorSeverity::Low,
            Self::Failed { .. } => ErrorSeverity::Medium,
            Self::BadParam { .. } | Self::BadValue { .. } | Self::UnableToLoad { .. } => {
                ErrorSeverity::High
            }
        }
    }

    /// Check if the same call can succeed after the caller adjusts its buffers
    pub fn should_retry(&self) -> bool {
        matches!(self, Self::BufferFull { .. })
    }

    /// Check if this error was caused by an option key or value
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::BadParam { .. } | Self::BadValue { .. })
    }

    /// Create a new generic failure
    pub fn failed<S: Into<String>>(message: S) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// Create a new buffer-full error
    pub fn buffer_full(capacity: usize) -> Self {
        Self::BufferFull { capacity }
    }

    /// Create a new unknown-parameter error
    pub fn bad_param<S: Into<String>>(key: S) -> Self {
        Self::BadParam { key: key.into() }
    }

    /// Create a new invalid-value error
    pub fn bad_value<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        Self::BadValue {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a new unable-to-load error
    pub fn unable_to_load<S: Into<String>>(codec: S) -> Self {
        Self::UnableToLoad {
            codec: codec.into(),
        }
    }
}

impl From<Error> for Status {
    fn from(error: Error) -> Self {
        error.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_every_error_maps_to_a_failure_status(
            key in ".*",
            value in ".*",
            capacity in any::<usize>()
        ) {
            let errors = vec![
                Error::failed(value.clone()),
                Error::buffer_full(capacity),
                Error::bad_param(key.clone()),
                Error::bad_value(key.clone(), value.clone()),
                Error::unable_to_load(key.clone()),
            ];

            for error in errors {
                let status = error.status();
                prop_assert!(status.is_error());

                match error {
                    Error::Failed { .. } => prop_assert_eq!(status, Status::Failed),
                    Error::BufferFull { .. } => prop_assert_eq!(status, Status::BufferFull),
                    Error::BadParam { .. } => prop_assert_eq!(status, Status::BadParam),
                    Error::BadValue { .. } => prop_assert_eq!(status, Status::BadValue),
                    Error::UnableToLoad { .. } => prop_assert_eq!(status, Status::UnableToLoad),
                }
            }
        }

        #[test]
        fn test_retry_implies_low_severity(capacity in any::<usize>()) {
            let error = Error::buffer_full(capacity);

            prop_assert!(error.should_retry());
            prop_assert_eq!(error.severity(), ErrorSeverity::Low);
        }
    }

    #[test]
    fn test_error_severity_ordering() {
        assert!(ErrorSeverity::Low < ErrorSeverity::Medium);
        assert!(ErrorSeverity::Medium < ErrorSeverity::High);
    }

    #[test]
    fn test_config_errors() {
        let param = Error::bad_param("window");
        let value = Error::bad_value("level", "5");

        assert!(param.is_config_error());
        assert!(value.is_config_error());
        assert!(!param.should_retry());
        assert_eq!(param.severity(), ErrorSeverity::High);
        assert!(param.to_string().contains("window"));
        assert!(value.to_string().contains("'5'"));
        assert!(value.to_string().contains("level"));
    }

    #[test]
    fn test_failed_error() {
        let error = Error::failed("truncated input");

        assert_eq!(error.status(), Status::Failed);
        assert_eq!(error.severity(), ErrorSeverity::Medium);
        assert!(!error.should_retry());
        assert!(!error.is_config_error());
        assert!(error.to_string().contains("truncated input"));
    }

    #[test]
    fn test_unable_to_load_error() {
        let error = Error::unable_to_load("zstd");

        assert_eq!(Status::from(error.clone()), Status::UnableToLoad);
        assert!(error.to_string().contains("zstd"));
    }
}
