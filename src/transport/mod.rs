// file: src/transport/mod.rs
// version: 1.0.0
// guid: 9a2f6c48-1e7b-4d35-b0c9-7e4a1f3d5b82

//! Secure stream abstraction used to talk to TCAT devices
//!
//! The BLE + TLS session is established by whoever constructs the stream.
//! Commands only ever see a connected [`SecureStream`].

pub mod framed;

pub use framed::FramedStream;

use crate::Result;
use std::time::Duration;

/// Trait for request/response exchanges over an established secure session
#[async_trait::async_trait]
pub trait SecureStream: Send {
    /// Human readable peer description for logs
    fn peer(&self) -> &str;

    /// How long `send_with_resp` waits for an answer
    fn response_timeout(&self) -> Duration;

    /// Write one encoded request
    async fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Read one encoded response, `None` if nothing arrives in time
    async fn recv(&mut self, timeout: Duration) -> Result<Option<Vec<u8>>>;

    /// Send a request and wait for its response
    async fn send_with_resp(&mut self, data: &[u8]) -> Result<Option<Vec<u8>>> {
        self.send(data).await?;
        let timeout = self.response_timeout();
        self.recv(timeout).await
    }

    /// Shut the session down
    async fn close(&mut self) -> Result<()>;
}
