// file: src/cli/commands.rs
// version: 1.1.0
// guid: 8f2d5a71-0c4e-4b96-a3d8-1e7f9b6c2a40

//! Command implementations for the CLI

use super::args::TlvAction;
use crate::{
    command::{CommandContext, CommandRegistry},
    config::ClientConfig,
    transport::FramedStream,
    Result,
};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{error, info, warn};

const PROMPT: &str = "tcat> ";

/// Build the command context, connecting when a device address is configured
pub async fn connect(config: &ClientConfig) -> Result<CommandContext> {
    let Some(address) = &config.device.address else {
        info!("No TCAT device configured, running without a connection");
        return Ok(CommandContext::new());
    };

    let stream = FramedStream::connect_tcp(
        address,
        config.device.connect_timeout(),
        config.device.response_timeout(),
    )
    .await?;
    Ok(CommandContext::with_stream(Box::new(stream)))
}

/// Close the active stream, if any. A failed close is logged and the stream
/// is dropped anyway.
pub async fn disconnect(context: &mut CommandContext) {
    if let Some(mut stream) = context.take_stream() {
        info!("Disconnecting from {}", stream.peer());
        if let Err(e) = stream.close().await {
            warn!("Failed to close connection to {}: {}", stream.peer(), e);
        }
    }
}

/// Run `tlv list` or `tlv send` once
pub async fn tlv_command(action: &TlvAction, context: &mut CommandContext) -> Result<()> {
    let registry = CommandRegistry::with_defaults();

    let mut args = vec!["tlv".to_string()];
    args.extend(action.to_args());

    let result = registry.dispatch(&args, context).await?;
    result.pretty_print();
    Ok(())
}

/// Dispatch commands read line by line until `exit` or end of input
pub async fn shell_command<R>(input: R, context: &mut CommandContext) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let registry = CommandRegistry::with_defaults();
    let mut lines = input.lines();

    loop {
        print!("{}", PROMPT);
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        let words: Vec<String> = line.split_whitespace().map(String::from).collect();
        match words.first().map(String::as_str) {
            None => continue,
            Some("exit") | Some("quit") => break,
            Some("help") => println!("{}", registry.help()),
            Some(_) => match registry.dispatch(&words, context).await {
                Ok(result) => result.pretty_print(),
                Err(e) => {
                    error!("{}", e);
                    println!("Error: {}", e);
                }
            },
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::SecureStream;
    use crate::TcatError;
    use tokio::io::{duplex, AsyncReadExt, AsyncWriteExt, BufReader};

    #[tokio::test]
    async fn test_connect_without_address() {
        let context = connect(&ClientConfig::default()).await.unwrap();
        assert!(!context.is_connected());
    }

    #[tokio::test]
    async fn test_connect_tcp_device() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        let device = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2];
            socket.read_exact(&mut request).await.unwrap();
            socket.write_all(&[0x01, 0x01, 0x00]).await.unwrap();
            request
        });

        let mut config = ClientConfig::default();
        config.apply_overrides(Some(addr), Some(1_000));
        let mut context = connect(&config).await.unwrap();
        assert!(context.is_connected());

        tlv_command(
            &TlvAction::Send {
                type_hex: "0a".to_string(),
                value_hex: None,
            },
            &mut context,
        )
        .await
        .unwrap();

        assert_eq!(device.await.unwrap(), [0x0A, 0x00]);
        disconnect(&mut context).await;
        assert!(!context.is_connected());
    }

    struct FailingCloseStream;

    #[async_trait::async_trait]
    impl SecureStream for FailingCloseStream {
        fn peer(&self) -> &str {
            "failing"
        }

        fn response_timeout(&self) -> std::time::Duration {
            std::time::Duration::from_millis(10)
        }

        async fn send(&mut self, _data: &[u8]) -> Result<()> {
            Err(TcatError::transport("link down"))
        }

        async fn recv(&mut self, _timeout: std::time::Duration) -> Result<Option<Vec<u8>>> {
            Ok(None)
        }

        async fn close(&mut self) -> Result<()> {
            Err(TcatError::transport("connection reset while closing"))
        }
    }

    #[tokio::test]
    async fn test_disconnect_swallows_close_failure() {
        let mut context = CommandContext::with_stream(Box::new(FailingCloseStream));
        disconnect(&mut context).await;
        assert!(!context.is_connected());
    }

    #[tokio::test]
    async fn test_command_error_survives_failed_close() {
        let mut context = CommandContext::with_stream(Box::new(FailingCloseStream));
        let outcome = tlv_command(
            &TlvAction::Send {
                type_hex: "0a".to_string(),
                value_hex: None,
            },
            &mut context,
        )
        .await;
        disconnect(&mut context).await;
        assert!(matches!(outcome, Err(TcatError::Transport(ref m)) if m == "link down"));
        assert!(!context.is_connected());
    }

    #[tokio::test]
    async fn test_shell_runs_until_exit() {
        let (client, mut device) = duplex(256);
        let stream = FramedStream::new(client, "duplex", std::time::Duration::from_millis(500));
        let mut context = CommandContext::with_stream(Box::new(stream));

        let device_task = tokio::spawn(async move {
            let mut request = [0u8; 3];
            device.read_exact(&mut request).await.unwrap();
            device.write_all(&[0x02, 0x01, 0x2a]).await.unwrap();
            request
        });

        let script = b"help\n\ntlv list\nbogus\ntlv send 0b 01\nexit\ntlv send 0a\n";
        shell_command(BufReader::new(&script[..]), &mut context)
            .await
            .unwrap();

        // Only the send before `exit` reached the device
        assert_eq!(device_task.await.unwrap(), [0x0B, 0x01, 0x01]);
    }

    #[tokio::test]
    async fn test_shell_stops_at_end_of_input() {
        let mut context = CommandContext::new();
        shell_command(BufReader::new(&b"tlv send 0a\n"[..]), &mut context)
            .await
            .unwrap();
        assert!(!context.is_connected());
    }
}
