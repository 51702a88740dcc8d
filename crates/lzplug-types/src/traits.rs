//! Core traits for codec plugins
//!
//! A host framework talks to every codec through these traits: a bound query,
//! an options record populated from key/value strings, and three buffer
//! operations. Implementations never call back into the host.

use crate::{BoundedOutput, Result};
use std::fmt::Debug;

/// Worst-case output size of a compression algorithm
pub trait CompressBound {
    /// Maximum compressed size for an input of `uncompressed_length` bytes
    ///
    /// Returns `0` when the algorithm cannot compress an input that large.
    fn max_compressed_size(&self, uncompressed_length: usize) -> usize;
}

/// Per-call configuration record of a codec
///
/// Records are created in their default state and mutated only through
/// [`CodecOptions::parse_option`]. A failed parse leaves the record unchanged.
pub trait CodecOptions: Default + Clone + Debug + Send + Sync {
    /// Apply a single key/value pair
    fn parse_option(&mut self, key: &str, value: &str) -> Result<()>;

    /// Apply key/value pairs in order, stopping at the first rejected pair
    fn parse_options<'a, I>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, value) in pairs {
            self.parse_option(key, value)?;
        }
        Ok(())
    }
}

/// Buffer-based codec as seen by the host framework
///
/// Output capacity is the length of the output slice; the returned length is
/// the number of bytes written into it.
pub trait Codec: CompressBound + Send + Sync {
    /// Options record understood by this codec
    type Options: CodecOptions;

    /// Codec name used for lookup
    fn name(&self) -> &str;

    /// Create a default-initialized options record
    fn create_options(&self) -> Self::Options {
        Self::Options::default()
    }

    /// Update `options` from a key/value pair
    fn parse_option(&self, options: &mut Self::Options, key: &str, value: &str) -> Result<()> {
        options.parse_option(key, value)
    }

    /// Decompress `input` into `output`
    fn decompress_buffer(
        &self,
        output: &mut [u8],
        input: &[u8],
        options: Option<&Self::Options>,
    ) -> Result<usize>;

    /// Compress `input` into `output`, reporting `BufferFull` when it does not fit
    fn compress_buffer(
        &self,
        output: &mut [u8],
        input: &[u8],
        options: Option<&Self::Options>,
    ) -> Result<usize>;

    /// Compress `input` into an output already validated against the bound
    ///
    /// An `input` longer than the length `output` was validated for reports
    /// `BufferFull`.
    fn compress_buffer_unsafe(
        &self,
        output: BoundedOutput<'_>,
        input: &[u8],
        options: Option<&Self::Options>,
    ) -> Result<usize>;

    /// Validate `buf` against the bound for `input_len` bytes
    fn bounded_output<'a>(&self, buf: &'a mut [u8], input_len: usize) -> Result<BoundedOutput<'a>>
    where
        Self: Sized,
    {
        BoundedOutput::new(self, buf, input_len)
    }
}
