// file: src/tlv/status.rs
// version: 1.0.0
// guid: 5e9d1b3a-7f20-4c64-8a1e-2b6c4d8f0e19

//! Status codes carried by `RESPONSE_W_STATUS` records

use crate::error::TcatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TcatResponseStatus {
    Success,
    Unsupported,
    ParseError,
    ValueError,
    GeneralError,
    Busy,
    Undefined,
    HashError,
    Unauthorized,
}

impl TcatResponseStatus {
    pub fn code(&self) -> u8 {
        match self {
            TcatResponseStatus::Success => 0,
            TcatResponseStatus::Unsupported => 1,
            TcatResponseStatus::ParseError => 2,
            TcatResponseStatus::ValueError => 3,
            TcatResponseStatus::GeneralError => 4,
            TcatResponseStatus::Busy => 5,
            TcatResponseStatus::Undefined => 6,
            TcatResponseStatus::HashError => 7,
            TcatResponseStatus::Unauthorized => 16,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TcatResponseStatus::Success => "SUCCESS",
            TcatResponseStatus::Unsupported => "UNSUPPORTED",
            TcatResponseStatus::ParseError => "PARSE_ERROR",
            TcatResponseStatus::ValueError => "VALUE_ERROR",
            TcatResponseStatus::GeneralError => "GENERAL_ERROR",
            TcatResponseStatus::Busy => "BUSY",
            TcatResponseStatus::Undefined => "UNDEFINED",
            TcatResponseStatus::HashError => "HASH_ERROR",
            TcatResponseStatus::Unauthorized => "UNAUTHORIZED",
        }
    }
}

impl TryFrom<u8> for TcatResponseStatus {
    type Error = TcatError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        let status = match code {
            0 => TcatResponseStatus::Success,
            1 => TcatResponseStatus::Unsupported,
            2 => TcatResponseStatus::ParseError,
            3 => TcatResponseStatus::ValueError,
            4 => TcatResponseStatus::GeneralError,
            5 => TcatResponseStatus::Busy,
            6 => TcatResponseStatus::Undefined,
            7 => TcatResponseStatus::HashError,
            16 => TcatResponseStatus::Unauthorized,
            other => {
                return Err(TcatError::decode(format!(
                    "unknown TCAT response status {}",
                    other
                )))
            }
        };
        Ok(status)
    }
}
