//! Layered configuration builder
//!
//! Sources are applied in the order they are added; later sources override
//! earlier ones. Explicit option pairs always win.

use crate::{CodecConfig, ConfigResult, DEFAULT_CODEC};
use config::{Environment, File, FileFormat};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment prefix read by [`ConfigBuilder::add_default_env`]
pub const ENV_PREFIX: &str = "LZPLUG";

/// Configuration builder for loading codec options from multiple sources
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    sources: Vec<ConfigSource>,
    pairs: Vec<(String, String)>,
    env_separator: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ConfigSource {
    File { path: PathBuf, required: bool },
    Toml(String),
    Environment { prefix: String },
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a TOML file that must exist
    pub fn add_source_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.sources.push(ConfigSource::File {
            path: path.as_ref().to_path_buf(),
            required: true,
        });
        self
    }

    /// Add a TOML file that is skipped when missing
    pub fn add_optional_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.sources.push(ConfigSource::File {
            path: path.as_ref().to_path_buf(),
            required: false,
        });
        self
    }

    /// Add TOML text
    pub fn add_toml_str<S: Into<String>>(mut self, text: S) -> Self {
        self.sources.push(ConfigSource::Toml(text.into()));
        self
    }

    /// Add environment variables with `prefix`, e.g. `PREFIX_OPTIONS__LEVEL`
    pub fn add_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.sources.push(ConfigSource::Environment {
            prefix: prefix.into(),
        });
        self
    }

    /// Add environment variables with the [`ENV_PREFIX`] prefix
    pub fn add_default_env(self) -> Self {
        self.add_env_prefix(ENV_PREFIX)
    }

    /// Set environment variable separator (default: "__")
    pub fn env_separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.env_separator = Some(separator.into());
        self
    }

    /// Add one option pair on top of every other source
    pub fn add_pair<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Add option pairs on top of every other source
    pub fn add_pairs<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.pairs.extend(pairs);
        self
    }

    /// Build the configuration
    pub fn build(self) -> ConfigResult<CodecConfig> {
        let separator = self.env_separator.as_deref().unwrap_or("__");
        let mut inner = config::Config::builder().set_default("codec", DEFAULT_CODEC)?;

        for source in &self.sources {
            inner = match source {
                ConfigSource::File { path, required } => inner.add_source(
                    File::from(path.as_path())
                        .format(FileFormat::Toml)
                        .required(*required),
                ),
                ConfigSource::Toml(text) => {
                    inner.add_source(File::from_str(text, FileFormat::Toml))
                }
                ConfigSource::Environment { prefix } => inner.add_source(
                    Environment::with_prefix(prefix)
                        .prefix_separator("_")
                        .separator(separator),
                ),
            };
        }

        let mut config: CodecConfig = inner.build()?.try_deserialize()?;
        for (key, value) in self.pairs {
            config.options.insert(key, value);
        }

        debug!(
            codec = %config.codec,
            options = config.options.len(),
            sources = self.sources.len(),
            "configuration built"
        );
        Ok(config)
    }

    /// Try to build the configuration, returning defaults on error
    pub fn build_or_default(self) -> CodecConfig {
        self.build().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_builder_gives_defaults() {
        let config = ConfigBuilder::new().build().unwrap();
        assert_eq!(config, CodecConfig::default());
    }

    #[test]
    fn test_toml_string_source() {
        let config = ConfigBuilder::new()
            .add_toml_str("codec = \"lz4\"\n\n[options]\nlevel = \"9\"\n")
            .build()
            .unwrap();

        assert_eq!(config.codec, "lz4");
        assert_eq!(config.options.get("level").map(String::as_str), Some("9"));
    }

    #[test]
    fn test_later_sources_override() {
        let config = ConfigBuilder::new()
            .add_toml_str("[options]\nlevel = \"9\"\n")
            .add_toml_str("[options]\nlevel = \"1\"\n")
            .build()
            .unwrap();
        assert_eq!(config.options.get("level").map(String::as_str), Some("1"));

        let config = ConfigBuilder::new()
            .add_toml_str("[options]\nlevel = \"1\"\n")
            .add_pair("level", "9")
            .build()
            .unwrap();
        assert_eq!(config.options.get("level").map(String::as_str), Some("9"));
    }

    #[test]
    fn test_file_sources() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lzplug.toml");
        fs::write(&path, "[options]\nlevel = \"9\"\n").unwrap();

        let config = ConfigBuilder::new().add_source_file(&path).build().unwrap();
        assert_eq!(config.options.get("level").map(String::as_str), Some("9"));

        let missing = temp_dir.path().join("missing.toml");
        assert!(ConfigBuilder::new().add_source_file(&missing).build().is_err());

        let config = ConfigBuilder::new()
            .add_optional_file(&missing)
            .build()
            .unwrap();
        assert_eq!(config, CodecConfig::default());
    }

    #[test]
    fn test_environment_source() {
        std::env::set_var("LZPLUGENVTEST_CODEC", "lz4");
        std::env::set_var("LZPLUGENVTEST_OPTIONS__LEVEL", "9");

        let config = ConfigBuilder::new()
            .add_toml_str("[options]\nlevel = \"1\"\n")
            .add_env_prefix("LZPLUGENVTEST")
            .build()
            .unwrap();

        assert_eq!(config.codec, "lz4");
        assert_eq!(config.options.get("level").map(String::as_str), Some("9"));

        let config = ConfigBuilder::new()
            .add_env_prefix("LZPLUGENVTEST")
            .add_pair("level", "1")
            .build()
            .unwrap();
        assert_eq!(config.options.get("level").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_environment_custom_separator() {
        std::env::set_var("LZPLUGSEPTEST_OPTIONS_LEVEL", "9");

        let config = ConfigBuilder::new()
            .add_env_prefix("LZPLUGSEPTEST")
            .env_separator("_")
            .build()
            .unwrap();
        assert_eq!(config.options.get("level").map(String::as_str), Some("9"));

        // with the default separator the variable is a single unknown key
        let config = ConfigBuilder::new()
            .add_env_prefix("LZPLUGSEPTEST")
            .build()
            .unwrap();
        assert_eq!(config.options.get("level"), None);
    }

    #[test]
    fn test_environment_without_variables() {
        let config = ConfigBuilder::new()
            .add_env_prefix("LZPLUGUNSETTEST")
            .build()
            .unwrap();
        assert_eq!(config, CodecConfig::default());
    }

    #[test]
    fn test_default_env_uses_lzplug_prefix() {
        let builder = ConfigBuilder::new().add_default_env();
        assert_eq!(
            builder.sources,
            vec![ConfigSource::Environment {
                prefix: ENV_PREFIX.to_string()
            }]
        );
    }

    #[test]
    fn test_malformed_toml() {
        let error = ConfigBuilder::new()
            .add_toml_str("[options\nlevel = ")
            .build()
            .unwrap_err();
        assert!(matches!(error, ConfigError::Parse { .. }));

        let config = ConfigBuilder::new()
            .add_toml_str("[options\nlevel = ")
            .build_or_default();
        assert_eq!(config, CodecConfig::default());
    }
}
