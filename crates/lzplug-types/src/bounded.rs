//! Output buffers proven large enough for unchecked compression
//!
//! A [`BoundedOutput`] can only be built after its capacity has been checked
//! against [`CompressBound::max_compressed_size`], so holding one is the proof
//! the unchecked compression path relies on.

use crate::{CompressBound, Error, Result};

/// Mutable output slice whose capacity covers the worst case for one input length
#[derive(Debug)]
pub struct BoundedOutput<'a> {
    buf: &'a mut [u8],
    input_len: usize,
}

impl<'a> BoundedOutput<'a> {
    /// Validate `buf` for compressing `input_len` bytes
    pub fn new<B>(bound: &B, buf: &'a mut [u8], input_len: usize) -> Result<Self>
    where
        B: CompressBound + ?Sized,
    {
        let required = bound.max_compressed_size(input_len);
        if required == 0 {
            return Err(Error::failed(format!(
                "input of {} bytes exceeds the codec's maximum input size",
                input_len
            )));
        }
        if buf.len() < required {
            return Err(Error::buffer_full(buf.len()));
        }
        Ok(Self { buf, input_len })
    }

    /// Input length this buffer was validated for
    pub fn input_len(&self) -> usize {
        self.input_len
    }

    /// Capacity of the underlying slice
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Release the validated slice
    pub fn into_slice(self) -> &'a mut [u8] {
        self.buf
    }
}

/// Owned allocation sized to the compression bound of one input length
#[derive(Debug, Clone)]
pub struct BoundedBuffer {
    buf: Vec<u8>,
    input_len: usize,
}

impl BoundedBuffer {
    /// Allocate a zeroed buffer of exactly the bound for `input_len` bytes
    pub fn for_input<B>(bound: &B, input_len: usize) -> Result<Self>
    where
        B: CompressBound + ?Sized,
    {
        let required = bound.max_compressed_size(input_len);
        if required == 0 {
            return Err(Error::failed(format!(
                "input of {} bytes exceeds the codec's maximum input size",
                input_len
            )));
        }
        Ok(Self {
            buf: vec![0u8; required],
            input_len,
        })
    }

    /// Input length this buffer was sized for
    pub fn input_len(&self) -> usize {
        self.input_len
    }

    /// Capacity of the allocation
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Borrow the allocation as a validated output
    pub fn as_output(&mut self) -> BoundedOutput<'_> {
        BoundedOutput {
            buf: self.buf.as_mut_slice(),
            input_len: self.input_len,
        }
    }

    /// Keep the first `written` bytes and return them
    pub fn into_vec(mut self, written: usize) -> Vec<u8> {
        self.buf.truncate(written);
        self.buf
    }
}
