//! Thin wrappers over the native LZ4 block primitives
//!
//! Native LZ4 reports results by overloading one integer: negative for corrupt
//! input, zero for "did not fit", positive for the number of bytes written.
//! The wrappers here turn every native return into an [`Outcome`] before the
//! adapter sees it.

use crate::options::Level;
use lz4::block::{self, CompressionMode};
use lzplug_types::{BoundedOutput, Error, Result};
use std::io;

/// Largest input LZ4 accepts (`LZ4_MAX_INPUT_SIZE`)
pub const MAX_INPUT_SIZE: usize = 0x7E00_0000;

/// Compression level passed to the HC compressor (`LZ4HC_CLEVEL_DEFAULT`)
pub const HIGH_RATIO_LEVEL: i32 = 9;

/// Result of one native call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The call produced this many bytes
    Written(usize),
    /// The output capacity was insufficient
    BufferFull,
    /// The input was malformed, truncated or too large
    Failed,
}

impl Outcome {
    /// Translate into the framework's error taxonomy
    ///
    /// `capacity` is the output capacity that was offered to the native call.
    pub fn into_result(self, capacity: usize, operation: &str) -> Result<usize> {
        match self {
            Outcome::Written(length) => Ok(length),
            Outcome::BufferFull => Err(Error::buffer_full(capacity)),
            Outcome::Failed => Err(Error::failed(format!("lz4 {} failed", operation))),
        }
    }
}

/// Worst-case compressed size (`LZ4_COMPRESSBOUND`), `0` above [`MAX_INPUT_SIZE`]
pub fn compress_bound(uncompressed_length: usize) -> usize {
    if uncompressed_length > MAX_INPUT_SIZE {
        return 0;
    }
    block::compress_bound(uncompressed_length).unwrap_or(0)
}

fn compression_mode(level: Level) -> CompressionMode {
    match level {
        Level::Fast => CompressionMode::DEFAULT,
        Level::HighRatio => CompressionMode::HIGHCOMPRESSION(HIGH_RATIO_LEVEL),
    }
}

/// Compress into `output`, never writing past its length
pub fn compress_limited(input: &[u8], output: &mut [u8], level: Level) -> Outcome {
    if input.len() > MAX_INPUT_SIZE {
        return Outcome::Failed;
    }
    let capacity = output.len().min(i32::MAX as usize);

    match block::compress_to_buffer(input, Some(compression_mode(level)), false, &mut output[..capacity]) {
        Ok(0) => Outcome::BufferFull,
        Ok(written) => Outcome::Written(written),
        Err(e) if e.kind() == io::ErrorKind::InvalidInput => Outcome::Failed,
        // lz4 reports a zero-byte native result as a generic error
        Err(_) => Outcome::BufferFull,
    }
}

/// Compress into an output already validated against [`compress_bound`]
///
/// The native call is given exactly the bound as capacity, which is what the
/// unbounded LZ4 entry points do internally.
pub fn compress_bounded(input: &[u8], output: BoundedOutput<'_>, level: Level) -> Outcome {
    let bound = compress_bound(input.len());
    let output = output.into_slice();
    let capacity = bound.min(output.len());
    compress_limited(input, &mut output[..capacity], level)
}

/// Decompress into `output` with `LZ4_decompress_safe`
pub fn decompress_safe(input: &[u8], output: &mut [u8]) -> Outcome {
    if input.len() > i32::MAX as usize {
        return Outcome::Failed;
    }
    let capacity = output.len().min(MAX_INPUT_SIZE);

    match block::decompress_to_buffer(input, Some(capacity as i32), &mut output[..capacity]) {
        Ok(written) => Outcome::Written(written),
        Err(_) => Outcome::Failed,
    }
}
