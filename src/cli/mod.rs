// file: src/cli/mod.rs
// version: 1.0.0
// guid: 0e6a9d42-7b15-4c83-b2f9-5d1c8e4a7f60

//! Command line interface for the TCAT TLV client

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
