// file: src/command/tlv.rs
// version: 1.0.0
// guid: e81b4f2a-3c96-4d07-b5a8-0f6d2e9c7b13

//! `tlv` command: list known TLV types or send a custom TLV record
//!
//! ```text
//! tlv list
//! tlv send <type_hex> [value_hex]
//! ```

use super::{BleCommand, CommandContext, CommandResult};
use crate::error::{Result, TcatError};
use crate::tlv::{TcatTlvType, Tlv};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Sub-commands of `tlv`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlvTreeCommand {
    List,
    Send,
}

impl FromStr for TlvTreeCommand {
    type Err = TcatError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "list" => Ok(TlvTreeCommand::List),
            "send" => Ok(TlvTreeCommand::Send),
            other => Err(TcatError::data_not_prepared(format!(
                "'{}' is not a valid tlv sub-command (expected list or send)",
                other
            ))),
        }
    }
}

/// What `prepare_data` produced from the arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreparedData {
    /// Text to show, nothing goes to the device
    Listing(String),
    /// Encoded TLV to send
    Request(Vec<u8>),
}

pub struct TlvCommand;

impl TlvCommand {
    /// Turn the command arguments into something to print or send
    pub fn prepare_data(args: &[String]) -> Result<PreparedData> {
        let sub = args
            .first()
            .ok_or_else(|| TcatError::data_not_prepared("missing tlv sub-command"))?;

        match sub.parse::<TlvTreeCommand>()? {
            TlvTreeCommand::List => Ok(PreparedData::Listing(TcatTlvType::listing())),
            TlvTreeCommand::Send => {
                let type_arg = args
                    .get(1)
                    .ok_or_else(|| TcatError::data_not_prepared("missing TLV type"))?;
                let tlv_type = parse_tlv_type(type_arg)?;
                let value = match args.get(2) {
                    Some(value_arg) => parse_hex_value(value_arg)?,
                    None => Vec::new(),
                };

                debug!("Prepared {} with {} value bytes", tlv_type, value.len());
                let data = Tlv::new(tlv_type.code(), value)
                    .to_bytes()
                    .map_err(|e| TcatError::data_not_prepared(e.to_string()))?;
                Ok(PreparedData::Request(data))
            }
        }
    }
}

#[async_trait::async_trait]
impl BleCommand for TlvCommand {
    fn name(&self) -> &'static str {
        "tlv"
    }

    fn help_string(&self) -> &'static str {
        "Send custom TLV message."
    }

    fn log_string(&self) -> Option<String> {
        Some("Sending custom TLV message".to_string())
    }

    async fn execute_default(
        &self,
        args: &[String],
        context: &mut CommandContext,
    ) -> Result<CommandResult> {
        let is_list = args
            .first()
            .map(|a| matches!(a.parse::<TlvTreeCommand>(), Ok(TlvTreeCommand::List)))
            .unwrap_or(false);

        // `list` never touches the device
        if !is_list && !context.is_connected() {
            println!("TCAT Device not connected.");
            return Ok(CommandResult::None);
        }

        let data = match Self::prepare_data(args) {
            Ok(PreparedData::Listing(listing)) => {
                println!("\n{}", listing);
                return Ok(CommandResult::None);
            }
            Ok(PreparedData::Request(data)) => data,
            Err(TcatError::DataNotPrepared(reason)) => {
                warn!("TLV command not prepared: {}", reason);
                println!("Command failed {}", reason);
                return Ok(CommandResult::None);
            }
            Err(e) => return Err(e),
        };

        let Some(stream) = context.stream_mut() else {
            println!("TCAT Device not connected.");
            return Ok(CommandResult::None);
        };

        let response = match stream.send_with_resp(&data).await? {
            Some(response) if !response.is_empty() => response,
            _ => {
                info!("No response from TCAT device");
                return Ok(CommandResult::None);
            }
        };

        let tlv = Tlv::from_bytes(&response)?;
        Ok(CommandResult::Tlv(tlv))
    }
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Parse a hexadecimal type code into a known TCAT type
fn parse_tlv_type(arg: &str) -> Result<TcatTlvType> {
    let code = u8::from_str_radix(strip_hex_prefix(arg.trim()), 16).map_err(|e| {
        TcatError::data_not_prepared(format!("invalid TLV type '{}': {}", arg, e))
    })?;
    TcatTlvType::try_from(code).map_err(|e| TcatError::data_not_prepared(e.to_string()))
}

/// Parse a hexadecimal byte string
fn parse_hex_value(arg: &str) -> Result<Vec<u8>> {
    hex::decode(strip_hex_prefix(arg.trim()))
        .map_err(|e| TcatError::data_not_prepared(format!("invalid TLV value '{}': {}", arg, e)))
}
