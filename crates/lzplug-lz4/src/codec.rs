//! LZ4 buffer adapter
//!
//! [`Lz4Codec`] implements the framework's [`Codec`] contract on top of the
//! native LZ4 block functions. Compression dispatches to the fast or HC
//! compressor from the options record; decompression takes no options.

use crate::native;
use crate::options::{Level, Lz4Options};
use lzplug_types::{BoundedBuffer, BoundedOutput, Codec, CompressBound, Error, Result};
use tracing::trace;

/// Name the codec is registered under
pub const CODEC_NAME: &str = "lz4";

/// LZ4 codec adapter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lz4Codec;

impl Lz4Codec {
    /// Create the adapter
    pub fn new() -> Self {
        Self
    }

    /// Compress `input` into a freshly allocated, bound-sized buffer
    pub fn compress_to_vec(&self, input: &[u8], options: Option<&Lz4Options>) -> Result<Vec<u8>> {
        let mut buffer = BoundedBuffer::for_input(self, input.len())?;
        let written = self.compress_buffer_unsafe(buffer.as_output(), input, options)?;
        Ok(buffer.into_vec(written))
    }
}

fn level_of(options: Option<&Lz4Options>) -> Level {
    options.map_or(Level::Fast, Lz4Options::level)
}

impl CompressBound for Lz4Codec {
    fn max_compressed_size(&self, uncompressed_length: usize) -> usize {
        native::compress_bound(uncompressed_length)
    }
}

impl Codec for Lz4Codec {
    type Options = Lz4Options;

    fn name(&self) -> &str {
        CODEC_NAME
    }

    fn decompress_buffer(
        &self,
        output: &mut [u8],
        input: &[u8],
        _options: Option<&Lz4Options>,
    ) -> Result<usize> {
        let capacity = output.len();
        trace!(input_len = input.len(), capacity, "lz4 decompress");

        native::decompress_safe(input, output).into_result(capacity, "decompression")
    }

    fn compress_buffer(
        &self,
        output: &mut [u8],
        input: &[u8],
        options: Option<&Lz4Options>,
    ) -> Result<usize> {
        let level = level_of(options);
        let capacity = output.len();
        trace!(input_len = input.len(), capacity, %level, "lz4 compress");

        native::compress_limited(input, output, level).into_result(capacity, "compression")
    }

    fn compress_buffer_unsafe(
        &self,
        output: BoundedOutput<'_>,
        input: &[u8],
        options: Option<&Lz4Options>,
    ) -> Result<usize> {
        let capacity = output.capacity();
        // the token only covers inputs up to the length it was validated for
        if input.len() > output.input_len() {
            return Err(Error::buffer_full(capacity));
        }
        debug_assert!(capacity >= self.max_compressed_size(input.len()));

        let level = level_of(options);
        trace!(input_len = input.len(), capacity, %level, "lz4 compress (bounded)");

        native::compress_bounded(input, output, level).into_result(capacity, "compression")
    }
}
