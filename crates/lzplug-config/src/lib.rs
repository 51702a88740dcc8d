//! Key/value option sources for lzplug codecs
//!
//! Codecs are configured with plain key/value string pairs. This crate collects
//! those pairs from the usual places and feeds them to a codec's option parser:
//!
//! - **TOML files and strings**: a `codec` name and an `[options]` table of strings
//! - **Environment overrides**: `LZPLUG_CODEC`, `LZPLUG_OPTIONS__<KEY>`
//! - **Option lists**: `level=9,key=value` as given on a command line
//!
//! # Examples
//!
//! ```rust
//! use lzplug_config::ConfigBuilder;
//! use lzplug_lz4::Lz4Codec;
//!
//! let config = ConfigBuilder::new()
//!     .add_toml_str("codec = \"lz4\"\n[options]\nlevel = \"9\"\n")
//!     .build()?;
//!
//! let options = config.build_options(&Lz4Codec::new())?;
//! assert!(options.high_ratio());
//! # Ok::<(), lzplug_config::ConfigError>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use lzplug_types::Codec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

pub mod builder;
pub mod error;
pub mod loader;
pub mod pairs;

pub use builder::ConfigBuilder;
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use pairs::{parse_pair, parse_pairs};

/// Codec selected when a configuration does not name one
pub const DEFAULT_CODEC: &str = "lz4";

fn default_codec() -> String {
    DEFAULT_CODEC.to_string()
}

/// Codec name plus the key/value options to apply to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Codec the options are meant for
    #[serde(default = "default_codec")]
    pub codec: String,
    /// Option pairs, applied in key order
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            codec: default_codec(),
            options: BTreeMap::new(),
        }
    }
}

impl CodecConfig {
    /// Create an empty configuration for `codec`
    pub fn new<S: Into<String>>(codec: S) -> Self {
        Self {
            codec: codec.into(),
            options: BTreeMap::new(),
        }
    }

    /// Add or replace an option
    pub fn with_option<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Apply every option to `options` through the codec's parser
    ///
    /// Either all pairs are applied or, on the first rejected pair, none are.
    pub fn apply<C: Codec>(&self, codec: &C, options: &mut C::Options) -> ConfigResult<()> {
        if self.codec != codec.name() {
            return Err(ConfigError::CodecMismatch {
                configured: self.codec.clone(),
                codec: codec.name().to_string(),
            });
        }

        let mut staged = options.clone();
        for (key, value) in &self.options {
            codec.parse_option(&mut staged, key, value)?;
        }
        debug!(codec = %self.codec, count = self.options.len(), "options applied");

        *options = staged;
        Ok(())
    }

    /// Create a default options record for `codec` and apply this configuration
    pub fn build_options<C: Codec>(&self, codec: &C) -> ConfigResult<C::Options> {
        let mut options = codec.create_options();
        self.apply(codec, &mut options)?;
        Ok(options)
    }

    /// Serialize as TOML
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
