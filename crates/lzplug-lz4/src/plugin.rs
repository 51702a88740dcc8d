//! Plugin entry point
//!
//! A host framework loads this plugin and asks it for codecs by name. Only
//! [`CODEC_NAME`] is provided; every other name reports `UnableToLoad`.

use crate::codec::{Lz4Codec, CODEC_NAME};
use lzplug_types::{Error, Result};
use tracing::debug;

/// Names of the codecs this plugin provides
pub const CODECS: [&str; 1] = [CODEC_NAME];

/// Resolve a codec by name
pub fn init_codec(name: &str) -> Result<Lz4Codec> {
    if name == CODEC_NAME {
        debug!(codec = name, "codec initialized");
        Ok(Lz4Codec::new())
    } else {
        Err(Error::unable_to_load(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lzplug_types::{Codec, Status};

    #[test]
    fn test_init_lz4() {
        let codec = init_codec("lz4").unwrap();
        assert_eq!(codec.name(), "lz4");
    }

    #[test]
    fn test_unknown_codec() {
        for name in ["zstd", "LZ4", "lz4hc", ""] {
            let error = init_codec(name).unwrap_err();
            assert_eq!(error.status(), Status::UnableToLoad);
        }
    }

    #[test]
    fn test_every_listed_codec_loads() {
        for name in CODECS {
            assert!(init_codec(name).is_ok());
        }
    }
}
