//! Result type alias for codec operations

use crate::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, Error>;
