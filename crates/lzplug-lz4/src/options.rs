//! LZ4 options record and its key/value parser
//!
//! LZ4 exposes a single configuration axis: the fast compressor or the
//! high-ratio (HC) compressor. The only recognized key is `level`, and the only
//! accepted values are `1` (fast) and `9` (high ratio).

use lzplug_types::{CodecOptions, Error, Result};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Option keys recognized by the LZ4 codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKey {
    /// Compression level, `1` or `9`
    Level,
}

impl OptionKey {
    /// All recognized keys
    pub const ALL: [OptionKey; 1] = [OptionKey::Level];

    /// Canonical key name
    pub fn as_str(self) -> &'static str {
        match self {
            OptionKey::Level => "level",
        }
    }
}

impl FromStr for OptionKey {
    type Err = Error;

    fn from_str(key: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| Error::bad_param(key))
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compression level, one per native LZ4 compressor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Level {
    /// Default LZ4 compressor
    #[default]
    Fast = 1,
    /// LZ4 HC compressor
    HighRatio = 9,
}

impl Level {
    /// Numeric value accepted by the `level` key
    pub fn value(self) -> i64 {
        self as i64
    }

    /// Check if this level selects the HC compressor
    pub fn is_high_ratio(self) -> bool {
        self == Level::HighRatio
    }
}

impl TryFrom<i64> for Level {
    type Error = i64;

    fn try_from(value: i64) -> std::result::Result<Self, i64> {
        match value {
            1 => Ok(Level::Fast),
            9 => Ok(Level::HighRatio),
            other => Err(other),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Options record for the LZ4 codec
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lz4Options {
    high_ratio: bool,
}

impl Lz4Options {
    /// Create options in the default (fast) mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options for a specific level
    pub fn with_level(level: Level) -> Self {
        Self {
            high_ratio: level.is_high_ratio(),
        }
    }

    /// Check if the HC compressor is selected
    pub fn high_ratio(&self) -> bool {
        self.high_ratio
    }

    /// Level currently selected
    pub fn level(&self) -> Level {
        if self.high_ratio {
            Level::HighRatio
        } else {
            Level::Fast
        }
    }
}

impl CodecOptions for Lz4Options {
    fn parse_option(&mut self, key: &str, value: &str) -> Result<()> {
        match key.parse::<OptionKey>()? {
            OptionKey::Level => {
                let level = parse_integer(value)
                    .and_then(|n| Level::try_from(n).ok())
                    .ok_or_else(|| Error::bad_value(key, value))?;
                self.high_ratio = level.is_high_ratio();
            }
        }
        Ok(())
    }
}

/// Parse an integer the way C's `strtol(value, &end, 0)` does, requiring `*end == '\0'`
///
/// Leading whitespace and a sign are accepted, `0x`/`0X` selects hex and a
/// leading `0` selects octal. Anything after the digits rejects the value.
fn parse_integer(value: &str) -> Option<i64> {
    let s = value.trim_start_matches(|c: char| {
        matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
    });

    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (16, hex)
    } else if s.len() > 1 && s.starts_with('0') {
        (8, &s[1..])
    } else {
        (10, s)
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
