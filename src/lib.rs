// file: src/lib.rs
// version: 1.0.0
// guid: f2b7e4c0-8a53-4d19-b6e2-9c0d3a5f8e71

//! # TCAT TLV client
//!
//! Builds Type-Length-Value records from command line arguments, sends them to a
//! TCAT (Thread Commissioning over Authenticated TLS) device over an established
//! secure stream and decodes the device's TLV response.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod tlv;
pub mod transport;

pub use error::{Result, TcatError};

/// Version information for the client
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
