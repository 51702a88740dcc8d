//! Status codes shared by every codec in the framework
//!
//! Every codec operation reports one of these values. Failures also carry an
//! [`Error`](crate::Error) with context; [`Status`] is the flat code a host
//! framework switches on.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of status codes returned by codec operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(i32)]
pub enum Status {
    /// Operation completed successfully
    Ok = 1,
    /// Generic compression or decompression failure
    Failed = -1,
    /// The requested codec is not provided by this plugin
    UnableToLoad = -2,
    /// Unrecognized configuration key
    BadParam = -3,
    /// Recognized configuration key with an invalid value
    BadValue = -4,
    /// Output capacity was insufficient
    BufferFull = -5,
}

impl Status {
    /// All status codes, in declaration order
    pub const ALL: [Status; 6] = [
        Status::Ok,
        Status::Failed,
        Status::UnableToLoad,
        Status::BadParam,
        Status::BadValue,
        Status::BufferFull,
    ];

    /// Numeric code as seen by a C-style host
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Look up a status by its numeric code
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    /// Check if this status reports success
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }

    /// Check if this status reports a failure
    pub fn is_error(self) -> bool {
        !self.is_ok()
    }

    /// Short human readable description
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ok => "operation completed successfully",
            Status::Failed => "operation failed",
            Status::UnableToLoad => "unable to load the requested codec",
            Status::BadParam => "invalid parameter",
            Status::BadValue => "invalid value for parameter",
            Status::BufferFull => "output buffer full",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T> From<&crate::Result<T>> for Status {
    fn from(result: &crate::Result<T>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(error) => error.status(),
        }
    }
}
