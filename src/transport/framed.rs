// file: src/transport/framed.rs
// version: 1.1.0
// guid: 2d7b0e93-4c18-4a6f-9e25-8f1c3b6a0d47

//! TLV framed stream over any async byte stream
//!
//! Received bytes are kept in a buffer owned by the stream until a whole
//! record is present, so a timeout never discards part of a record.

use super::SecureStream;
use crate::error::{Result, TcatError};
use crate::tlv::{self, SHORT_HEADER_LEN};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::Instant;
use tracing::{debug, info, warn};

const READ_CHUNK: usize = 512;

/// Byte stream that exchanges whole TLV records
pub struct FramedStream<S> {
    inner: S,
    peer: String,
    response_timeout: Duration,
    pending: Vec<u8>,
}

impl<S> FramedStream<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    /// Wrap an already connected stream
    pub fn new(inner: S, peer: impl Into<String>, response_timeout: Duration) -> Self {
        Self {
            inner,
            peer: peer.into(),
            response_timeout,
            pending: Vec::new(),
        }
    }

    /// Split the first complete record off the buffer
    fn take_record(&mut self) -> Option<Vec<u8>> {
        if self.pending.len() < SHORT_HEADER_LEN {
            return None;
        }
        let header_len = tlv::header_len(self.pending[1]);
        let total = header_len + tlv::value_len(&self.pending)?;
        if self.pending.len() < total {
            return None;
        }
        Some(self.pending.drain(..total).collect())
    }

    /// Append whatever the peer sent next. `read` is cancel safe, so a
    /// timeout around this loses nothing.
    async fn fill(&mut self) -> Result<usize> {
        let mut chunk = [0u8; READ_CHUNK];
        let n = self.inner.read(&mut chunk).await?;
        self.pending.extend_from_slice(&chunk[..n]);
        Ok(n)
    }
}

impl FramedStream<TcpStream> {
    /// Connect to a simulated TCAT device listening on TCP
    pub async fn connect_tcp(
        addr: &str,
        connect_timeout: Duration,
        response_timeout: Duration,
    ) -> Result<Self> {
        info!("Connecting to TCAT device at {}", addr);

        let stream = tokio::time::timeout(connect_timeout, TcpStream::connect(addr))
            .await
            .map_err(|_| TcatError::timeout(format!("connecting to {}", addr)))?
            .map_err(|e| TcatError::transport(format!("Failed to connect to {}: {}", addr, e)))?;
        stream.set_nodelay(true)?;

        info!("Connected to {}", addr);
        Ok(Self::new(stream, addr, response_timeout))
    }
}

#[async_trait::async_trait]
impl<S> SecureStream for FramedStream<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    fn peer(&self) -> &str {
        &self.peer
    }

    fn response_timeout(&self) -> Duration {
        self.response_timeout
    }

    async fn send(&mut self, data: &[u8]) -> Result<()> {
        debug!("-> {}: {}", self.peer, hex::encode(data));
        self.inner.write_all(data).await?;
        self.inner.flush().await?;
        Ok(())
    }

    async fn recv(&mut self, timeout: Duration) -> Result<Option<Vec<u8>>> {
        let deadline = Instant::now() + timeout;

        loop {
            if let Some(record) = self.take_record() {
                debug!("<- {}: {}", self.peer, hex::encode(&record));
                return Ok(Some(record));
            }

            let filled = tokio::time::timeout_at(deadline, self.fill()).await;
            match filled {
                Ok(Ok(0)) if self.pending.is_empty() => {
                    warn!("{} closed the connection", self.peer);
                    return Ok(None);
                }
                Ok(Ok(0)) => {
                    return Err(TcatError::transport(format!(
                        "{} closed the connection inside a TLV record",
                        self.peer
                    )));
                }
                Ok(Ok(_)) => {}
                Ok(Err(e)) => return Err(e),
                Err(_) if self.pending.is_empty() => {
                    warn!("No response from {} within {:?}", self.peer, timeout);
                    return Ok(None);
                }
                Err(_) => {
                    // Partial bytes stay buffered for the next recv
                    return Err(TcatError::timeout(format!(
                        "{} sent {} bytes of a TLV record within {:?}",
                        self.peer,
                        self.pending.len(),
                        timeout
                    )));
                }
            }
        }
    }

    async fn close(&mut self) -> Result<()> {
        debug!("Closing stream to {}", self.peer);
        self.inner.shutdown().await?;
        Ok(())
    }
}
