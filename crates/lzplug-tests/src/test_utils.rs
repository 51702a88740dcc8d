//! Unified test utilities for lzplug benchmarks and tests
//!
//! This module provides common utilities used across all test files
//! to ensure consistency and reduce code duplication.

use lzplug_lz4::Level;

/// Test data generation patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestDataPattern {
    /// All zeros - highly compressible
    Zeros,
    /// Pseudo-random bytes - incompressible
    Random,
    /// Runs of constant bytes mixed with counters
    Mixed,
    /// English-like text with repeated words
    Text,
}

impl TestDataPattern {
    /// Every pattern
    pub const ALL: [TestDataPattern; 4] = [
        TestDataPattern::Zeros,
        TestDataPattern::Random,
        TestDataPattern::Mixed,
        TestDataPattern::Text,
    ];

    /// Short name for benchmark ids
    pub fn name(self) -> &'static str {
        match self {
            TestDataPattern::Zeros => "zeros",
            TestDataPattern::Random => "random",
            TestDataPattern::Mixed => "mixed",
            TestDataPattern::Text => "text",
        }
    }
}

/// Generate test data with specified pattern
///
/// Output is deterministic so benchmark runs are comparable.
pub fn generate_test_data(size: usize, pattern: TestDataPattern) -> Vec<u8> {
    match pattern {
        TestDataPattern::Zeros => vec![0u8; size],
        TestDataPattern::Random => {
            // xorshift64*, fixed seed
            let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
            (0..size)
                .map(|_| {
                    state ^= state >> 12;
                    state ^= state << 25;
                    state ^= state >> 27;
                    (state.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 56) as u8
                })
                .collect()
        }
        TestDataPattern::Mixed => (0..size)
            .map(|i| match i % 1000 {
                0..=99 => 0,
                100..=199 => 255,
                _ => (i % 256) as u8,
            })
            .collect(),
        TestDataPattern::Text => {
            const WORDS: [&str; 8] = [
                "codec ", "buffer ", "lz4 ", "compress ", "bound ", "level ", "options ", "status ",
            ];
            let mut data = Vec::with_capacity(size + 16);
            let mut i = 0usize;
            while data.len() < size {
                data.extend_from_slice(WORDS[(i * 7 + i / 3) % WORDS.len()].as_bytes());
                i += 1;
            }
            data.truncate(size);
            data
        }
    }
}

/// Both LZ4 levels
pub const LEVELS: [Level; 2] = [Level::Fast, Level::HighRatio];

/// Common input sizes for benchmarks
pub struct CommonSizes;

impl CommonSizes {
    /// 1KB
    pub const TINY: usize = 1024;
    /// 4KB
    pub const SMALL: usize = 4 * 1024;
    /// 64KB
    pub const MEDIUM: usize = 64 * 1024;
    /// 1MB
    pub const LARGE: usize = 1024 * 1024;

    /// Get all standard test sizes
    pub fn all() -> Vec<(&'static str, usize)> {
        vec![
            ("1KB", Self::TINY),
            ("4KB", Self::SMALL),
            ("64KB", Self::MEDIUM),
            ("1MB", Self::LARGE),
        ]
    }
}
