//! Configuration loader utilities

use crate::{CodecConfig, ConfigBuilder, ConfigError, ConfigResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader with common loading patterns
pub struct ConfigLoader;

/// File names searched for, in order of preference
pub const CONFIG_FILE_NAMES: [&str; 2] = ["lzplug.toml", ".lzplug.toml"];

impl ConfigLoader {
    /// Load configuration from the current directory and the environment
    pub fn load_default() -> ConfigResult<CodecConfig> {
        let dir = std::env::current_dir().map_err(|source| ConfigError::Io {
            path: PathBuf::from("."),
            source,
        })?;
        Self::load_from_dir(dir)
    }

    /// Load the first config file found in `dir`, then `LZPLUG_*` variables
    ///
    /// A directory without a config file yields the defaults plus the
    /// environment.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> ConfigResult<CodecConfig> {
        let mut builder = ConfigBuilder::new();

        if let Some(path) = Self::find_config(dir) {
            debug!(path = %path.display(), "config file found");
            builder = builder.add_source_file(path);
        }

        builder.add_default_env().build()
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<CodecConfig> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Configuration file not found",
                ),
            });
        }

        ConfigBuilder::new()
            .add_source_file(path)
            .add_default_env()
            .build()
    }

    /// Load configuration from TOML text, without environment overrides
    pub fn load_from_str(text: &str) -> ConfigResult<CodecConfig> {
        ConfigBuilder::new().add_toml_str(text).build()
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(config: &CodecConfig, path: P) -> ConfigResult<()> {
        let path = path.as_ref();
        let content = config.to_toml_string()?;

        std::fs::write(path, content).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// First of [`CONFIG_FILE_NAMES`] that exists in `dir`
    pub fn find_config<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.as_ref().join(name))
            .find(|path| path.is_file())
    }
}
