// file: src/logging/mod.rs
// version: 1.0.0
// guid: 4b8e2f60-1a3c-4d97-8e5b-6c0f9a2d7e31

//! Logging setup for the TCAT TLV client

pub mod logger;

pub use logger::{init_json_logger, init_logger};
