//! Codec framework vocabulary for lzplug
//!
//! This crate provides the types a host framework shares with every codec plugin.
//! It includes:
//!
//! - **Status codes**: A closed [`Status`] enum every operation reports
//! - **Error handling**: A structured [`Error`] with one variant per failure status
//! - **Traits**: [`Codec`], [`CodecOptions`] and [`CompressBound`]
//! - **Bounded buffers**: [`BoundedOutput`], the capacity proof for unchecked compression
//!
//! # Features
//!
//! - `serde`: Enable serialization support
//!
//! # Examples
//!
//! ```rust
//! use lzplug_types::{Error, Result, Status};
//!
//! fn parse_window(value: &str) -> Result<u32> {
//!     value.parse().map_err(|_| Error::bad_value("window", value))
//! }
//!
//! let result = parse_window("big");
//! assert_eq!(Status::from(&result), Status::BadValue);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bounded;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use bounded::{BoundedBuffer, BoundedOutput};
pub use error::{Error, ErrorSeverity};
pub use result::Result;
pub use traits::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_round_trip() {
        for status in Status::ALL {
            assert_eq!(Status::from_code(status.code()), Some(status));
        }
        assert_eq!(Status::from_code(0), None);
    }

    #[test]
    fn test_only_ok_is_success() {
        let successes: Vec<_> = Status::ALL.into_iter().filter(|s| s.is_ok()).collect();
        assert_eq!(successes, vec![Status::Ok]);
    }

    #[test]
    fn test_status_from_result() {
        let ok: Result<usize> = Ok(12);
        let full: Result<usize> = Err(Error::buffer_full(0));

        assert_eq!(Status::from(&ok), Status::Ok);
        assert_eq!(Status::from(&full), Status::BufferFull);
        assert_eq!(Status::BufferFull.to_string(), "output buffer full");
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Flags {
        verbose: bool,
    }

    impl CodecOptions for Flags {
        fn parse_option(&mut self, key: &str, value: &str) -> Result<()> {
            match (key, value) {
                ("verbose", "on") => self.verbose = true,
                ("verbose", "off") => self.verbose = false,
                ("verbose", _) => return Err(Error::bad_value(key, value)),
                _ => return Err(Error::bad_param(key)),
            }
            Ok(())
        }
    }

    #[test]
    fn test_parse_options_stops_at_first_error() {
        let mut flags = Flags::default();
        let result = flags.parse_options([("verbose", "on"), ("depth", "3"), ("verbose", "off")]);

        assert_eq!(result, Err(Error::bad_param("depth")));
        assert!(flags.verbose);
    }
}
