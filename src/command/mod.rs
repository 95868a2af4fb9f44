// file: src/command/mod.rs
// version: 1.0.0
// guid: 6c3e8a15-9d27-4b40-a8f3-1e5b7d2c9a06

//! Command framework: results, execution context and the name lookup table

pub mod tlv;

pub use tlv::TlvCommand;

use crate::error::{Result, TcatError};
use crate::logging::logger::with_async_operation_span;
use crate::tlv::{TcatResponseStatus, TcatTlvType, Tlv};
use crate::transport::SecureStream;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info};

/// Outcome of a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Nothing to report
    None,
    /// Decoded device response
    Tlv(Tlv),
}

impl CommandResult {
    pub fn is_none(&self) -> bool {
        matches!(self, CommandResult::None)
    }

    /// Print the result to stdout, nothing for an empty result
    pub fn pretty_print(&self) {
        if let CommandResult::Tlv(_) = self {
            println!("{}", self);
        }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tlv = match self {
            CommandResult::None => return Ok(()),
            CommandResult::Tlv(tlv) => tlv,
        };

        let type_name = tlv
            .tcat_type()
            .map(|t| t.name())
            .unwrap_or("UNKNOWN");
        writeln!(f, "TLV")?;
        writeln!(f, "\tTYPE:\t{} ({:#x})", type_name, tlv.tlv_type)?;
        writeln!(f, "\tLEN:\t{}", tlv.value.len())?;
        write!(f, "\tVALUE:\t0x{}", hex::encode(&tlv.value))?;

        match tlv.tcat_type() {
            Some(TcatTlvType::ResponseWithStatus) => {
                if let Some(status) = tlv
                    .value
                    .first()
                    .and_then(|code| TcatResponseStatus::try_from(*code).ok())
                {
                    write!(f, "\n\tSTATUS:\t{}", status.name())?;
                }
            }
            Some(TcatTlvType::ResponseWithPayload) => {
                if let Ok(text) = std::str::from_utf8(&tlv.value) {
                    if !text.is_empty() && text.chars().all(|c| !c.is_control()) {
                        write!(f, "\n\tTEXT:\t{}", text)?;
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }
}

/// State shared by commands across one session
#[derive(Default)]
pub struct CommandContext {
    stream: Option<Box<dyn SecureStream>>,
}

impl CommandContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with an already connected secure stream
    pub fn with_stream(stream: Box<dyn SecureStream>) -> Self {
        Self {
            stream: Some(stream),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    pub fn set_stream(&mut self, stream: Box<dyn SecureStream>) {
        debug!("Secure stream to {} attached", stream.peer());
        self.stream = Some(stream);
    }

    pub fn take_stream(&mut self) -> Option<Box<dyn SecureStream>> {
        self.stream.take()
    }

    pub fn stream_mut(&mut self) -> Option<&mut Box<dyn SecureStream>> {
        self.stream.as_mut()
    }
}

/// A command reachable by name from the CLI or the interactive shell
#[async_trait::async_trait]
pub trait BleCommand: Send + Sync {
    /// Name the command is registered under
    fn name(&self) -> &'static str;

    /// One line description for `help`
    fn help_string(&self) -> &'static str;

    /// Message logged before the command runs
    fn log_string(&self) -> Option<String> {
        None
    }

    /// Run the command with the words following its name
    async fn execute_default(
        &self,
        args: &[String],
        context: &mut CommandContext,
    ) -> Result<CommandResult>;
}

/// Lookup table from command name to command
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, Box<dyn BleCommand>>,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            commands: BTreeMap::new(),
        }
    }

    /// Registry with every command this client ships
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(TlvCommand));
        registry
    }

    pub fn register(&mut self, command: Box<dyn BleCommand>) {
        self.commands.insert(command.name(), command);
    }

    pub fn get(&self, name: &str) -> Option<&dyn BleCommand> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// `name\thelp` per registered command
    pub fn help(&self) -> String {
        self.commands
            .values()
            .map(|c| format!("{}\t{}", c.name(), c.help_string()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Resolve the first word of `args` and run that command with the rest
    pub async fn dispatch(
        &self,
        args: &[String],
        context: &mut CommandContext,
    ) -> Result<CommandResult> {
        let (name, rest) = args
            .split_first()
            .ok_or_else(|| TcatError::invalid_argument("empty command"))?;
        let command = self
            .get(name)
            .ok_or_else(|| TcatError::UnknownCommand(name.clone()))?;

        if let Some(message) = command.log_string() {
            info!("{}", message);
        }

        with_async_operation_span(command.name(), command.execute_default(rest, context)).await
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoCommand;

    #[async_trait::async_trait]
    impl BleCommand for EchoCommand {
        fn name(&self) -> &'static str {
            "echo"
        }

        fn help_string(&self) -> &'static str {
            "Echo the first argument as a TLV."
        }

        async fn execute_default(
            &self,
            args: &[String],
            _context: &mut CommandContext,
        ) -> Result<CommandResult> {
            let value = args.first().map(|a| a.as_bytes().to_vec()).unwrap_or_default();
            Ok(CommandResult::Tlv(Tlv::new(0x02, value)))
        }
    }

    fn words(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[tokio::test]
    async fn test_dispatch_routes_by_name() {
        let mut registry = CommandRegistry::with_defaults();
        registry.register(Box::new(EchoCommand));
        let mut context = CommandContext::new();

        let result = registry.dispatch(&words("echo hi"), &mut context).await.unwrap();
        assert_eq!(result, CommandResult::Tlv(Tlv::new(0x02, b"hi".to_vec())));
    }

    #[tokio::test]
    async fn test_dispatch_unknown_and_empty() {
        let registry = CommandRegistry::with_defaults();
        let mut context = CommandContext::new();

        let err = registry.dispatch(&words("nope"), &mut context).await.unwrap_err();
        assert!(matches!(err, TcatError::UnknownCommand(ref n) if n == "nope"));

        let err = registry.dispatch(&[], &mut context).await.unwrap_err();
        assert!(matches!(err, TcatError::InvalidArgument(_)));
    }

    #[test]
    fn test_context_stream_lifecycle() {
        let (client, _device) = tokio::io::duplex(16);
        let stream = crate::transport::FramedStream::new(
            client,
            "duplex",
            std::time::Duration::from_millis(10),
        );

        let mut context = CommandContext::new();
        assert!(!context.is_connected());
        context.set_stream(Box::new(stream));
        assert!(context.is_connected());
        assert_eq!(context.stream_mut().map(|s| s.peer().to_string()).as_deref(), Some("duplex"));
        assert!(context.take_stream().is_some());
        assert!(!context.is_connected());
    }

    #[test]
    fn test_help_lists_commands() {
        let mut registry = CommandRegistry::with_defaults();
        registry.register(Box::new(EchoCommand));
        let help = registry.help();
        assert_eq!(
            help,
            "echo\tEcho the first argument as a TLV.\ntlv\tSend custom TLV message."
        );
    }

    #[test]
    fn test_display_status_response() {
        let result = CommandResult::Tlv(Tlv::new(0x01, vec![0x00]));
        let text = result.to_string();
        assert!(text.starts_with("TLV\n"));
        assert!(text.contains("\tTYPE:\tRESPONSE_W_STATUS (0x1)"));
        assert!(text.contains("\tLEN:\t1"));
        assert!(text.contains("\tVALUE:\t0x00"));
        assert!(text.ends_with("\tSTATUS:\tSUCCESS"));
    }

    #[test]
    fn test_display_payload_response() {
        let result = CommandResult::Tlv(Tlv::new(0x02, b"OpenThread".to_vec()));
        let text = result.to_string();
        assert!(text.contains("\tVALUE:\t0x4f70656e546872656164"));
        assert!(text.ends_with("\tTEXT:\tOpenThread"));
    }

    #[test]
    fn test_display_unknown_type_and_none() {
        let text = CommandResult::Tlv(Tlv::new(0x7E, Vec::new())).to_string();
        assert!(text.contains("UNKNOWN (0x7e)"));
        assert_eq!(CommandResult::None.to_string(), "");
        assert!(CommandResult::None.is_none());
    }
}
