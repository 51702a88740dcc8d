//! Command-line style option lists
//!
//! `level=9,other=value` becomes `[("level", "9"), ("other", "value")]`.
//! Entries are separated by commas; whitespace around an entry and around the
//! key is dropped, the value is kept as written.

use crate::{ConfigError, ConfigResult};

/// Parse a comma separated `key=value` list
pub fn parse_pairs(input: &str) -> ConfigResult<Vec<(String, String)>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_pair)
        .collect()
}

/// Parse a single `key=value` entry
pub fn parse_pair(entry: &str) -> ConfigResult<(String, String)> {
    let (key, value) = entry
        .split_once('=')
        .ok_or_else(|| ConfigError::malformed_pair(entry))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(ConfigError::malformed_pair(entry));
    }

    Ok((key.to_string(), value.to_string()))
}
