//! lzplug integration testing suite
//!
//! This crate holds the cross-crate integration tests and the criterion
//! benchmarks for the lzplug codecs, plus the data generators they share.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Unified test utilities
///
/// Data generators and size tables shared by tests and benchmarks.
pub mod test_utils;

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per process
///
/// The filter comes from `RUST_LOG` and defaults to `warn`; set
/// `RUST_LOG=lzplug_lz4=trace` to see every codec dispatch.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
        tracing::debug!("tracing initialized twice");
    }
}
