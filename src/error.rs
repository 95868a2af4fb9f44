// file: src/error.rs
// version: 1.0.0
// guid: 3f1c9a2e-8d4b-4e71-a6c0-5b2d7e9f1a34

use thiserror::Error;

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, TcatError>;

/// Error types for the TCAT TLV client
#[derive(Error, Debug)]
pub enum TcatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Command arguments could not be turned into a TLV request
    #[error("{0}")]
    DataNotPrepared(String),

    #[error("TLV decode error: {0}")]
    Decode(String),

    #[error("TLV encode error: {0}")]
    Encode(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl TcatError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new "data not prepared" error
    pub fn data_not_prepared(msg: impl Into<String>) -> Self {
        Self::DataNotPrepared(msg.into())
    }

    /// Create a new decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a new encode error
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Create a new transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a new timeout error
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
