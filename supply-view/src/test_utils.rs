//! Helpers shared by the integration tests and the demo binary.

use std::fs;

use alloy_core::hex;
use revm::primitives::Bytes;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber. Safe to call more than once.
pub fn initialize_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Load hex-encoded runtime bytecode from a fixture file.
pub fn load_bytecode_from_file(path: &str) -> Bytes {
    let hex_str = fs::read_to_string(path).expect("fixture file should exist");
    Bytes::from(hex::decode(hex_str.trim()).expect("fixture should be valid hex"))
}
