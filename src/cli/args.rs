// file: src/cli/args.rs
// version: 1.0.0
// guid: b5c81f3e-6d29-4a70-9e46-2f8b0d7c1a95

//! Command line argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tcat-tlv-client")]
#[command(about = "Send custom TLV messages to TCAT capable Thread devices")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(
        short,
        long,
        global = true,
        help = "Configuration file (defaults to <config dir>/tcat-tlv-client/config.toml)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        env = "TCAT_DEVICE",
        help = "host:port of a simulated TCAT device"
    )]
    pub device: Option<String>,

    #[arg(long, global = true, help = "Response timeout in milliseconds")]
    pub timeout_ms: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send custom TLV message
    Tlv {
        #[command(subcommand)]
        action: TlvAction,
    },

    /// Read commands from stdin, one per line
    Shell,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum TlvAction {
    /// List known TLV types
    List,

    /// Send a TLV and print the decoded response
    Send {
        #[arg(help = "TLV type code in hex, e.g. 0a")]
        type_hex: String,

        #[arg(help = "TLV value bytes in hex, e.g. deadbeef")]
        value_hex: Option<String>,
    },
}

impl TlvAction {
    /// Words passed to the `tlv` command
    pub fn to_args(&self) -> Vec<String> {
        match self {
            TlvAction::List => vec!["list".to_string()],
            TlvAction::Send {
                type_hex,
                value_hex,
            } => {
                let mut args = vec!["send".to_string(), type_hex.clone()];
                args.extend(value_hex.iter().cloned());
                args
            }
        }
    }
}
