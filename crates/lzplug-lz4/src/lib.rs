//! LZ4 codec adapter for the lzplug compression framework
//!
//! This crate implements the framework's codec contract for LZ4 with its two
//! native compressors. It includes:
//!
//! - **Options**: A typed options record populated from `level=1` / `level=9`
//! - **Buffer adapter**: Bound query, bounded and unbounded compression, decompression
//! - **Status translation**: Native LZ4 return values mapped onto framework statuses
//! - **Plugin entry point**: Codec lookup by name
//!
//! # Features
//!
//! - `serde` (default): Enable serialization support for option records
//!
//! # Examples
//!
//! ```rust
//! use lzplug_lz4::init_codec;
//! use lzplug_types::{Codec, CompressBound};
//!
//! let codec = init_codec("lz4")?;
//! let mut options = codec.create_options();
//! codec.parse_option(&mut options, "level", "9")?;
//!
//! let data = b"Hello, world! This is test data for compression.".repeat(4);
//! let mut compressed = vec![0u8; codec.max_compressed_size(data.len())];
//! let written = codec.compress_buffer(&mut compressed, &data, Some(&options))?;
//!
//! let mut restored = vec![0u8; data.len()];
//! let len = codec.decompress_buffer(&mut restored, &compressed[..written], None)?;
//! assert_eq!(&restored[..len], data.as_slice());
//! # Ok::<(), lzplug_types::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod codec;
pub mod native;
pub mod options;
pub mod plugin;


// Re-export main types
pub use codec::{Lz4Codec, CODEC_NAME};
pub use native::Outcome;
pub use options::{Level, Lz4Options, OptionKey};
pub use plugin::init_codec;
