// file: src/tlv/mod.rs
// version: 1.1.0
// guid: 8b0e4d17-2c6a-4f93-b5e1-0a7d3c9e2f58

//! Type-Length-Value records as exchanged with TCAT devices
//!
//! Wire format:
//! - short form: `[type:1][len:1][value]` for values shorter than 255 bytes
//! - long form: `[type:1][0xFF][len:2 big-endian][value]`

pub mod status;
pub mod tcat;

pub use status::TcatResponseStatus;
pub use tcat::TcatTlvType;

use crate::error::{Result, TcatError};

/// Marker in the first length byte announcing a two byte length
pub const LONG_LENGTH_MARKER: u8 = 0xFF;

/// Header size of a short form record
pub const SHORT_HEADER_LEN: usize = 2;

/// Header size of a long form record
pub const LONG_HEADER_LEN: usize = 4;

/// Largest value a single record can carry
pub const MAX_VALUE_LEN: usize = u16::MAX as usize;

/// A single TLV record. The length is implied by `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tlv {
    pub tlv_type: u8,
    pub value: Vec<u8>,
}

impl Tlv {
    /// Create a new record
    pub fn new(tlv_type: u8, value: impl Into<Vec<u8>>) -> Self {
        Self {
            tlv_type,
            value: value.into(),
        }
    }

    /// Known TCAT type of this record, if any
    pub fn tcat_type(&self) -> Option<TcatTlvType> {
        TcatTlvType::try_from(self.tlv_type).ok()
    }

    fn has_long_header(&self) -> bool {
        self.value.len() >= LONG_LENGTH_MARKER as usize
    }

    /// Number of bytes `to_bytes` produces
    pub fn encoded_len(&self) -> usize {
        let header = if self.has_long_header() {
            LONG_HEADER_LEN
        } else {
            SHORT_HEADER_LEN
        };
        header + self.value.len()
    }

    /// Serialize the record to its wire form
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let len = self.value.len();
        if len > MAX_VALUE_LEN {
            return Err(TcatError::encode(format!(
                "value of {} bytes exceeds the {} byte limit",
                len, MAX_VALUE_LEN
            )));
        }

        let mut out = Vec::with_capacity(self.encoded_len());
        out.push(self.tlv_type);
        if self.has_long_header() {
            out.push(LONG_LENGTH_MARKER);
            out.extend_from_slice(&(len as u16).to_be_bytes());
        } else {
            out.push(len as u8);
        }
        out.extend_from_slice(&self.value);
        Ok(out)
    }

    /// Decode the first record in `data`. Trailing bytes are ignored.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < SHORT_HEADER_LEN {
            return Err(TcatError::decode(format!(
                "need at least {} bytes for a TLV header, got {}",
                SHORT_HEADER_LEN,
                data.len()
            )));
        }

        let header_len = header_len(data[1]);
        let value_len =
            value_len(data).ok_or_else(|| TcatError::decode("truncated long TLV header"))?;
        let end = header_len + value_len;
        if data.len() < end {
            return Err(TcatError::decode(format!(
                "TLV declares {} value bytes but only {} are present",
                value_len,
                data.len() - header_len
            )));
        }

        Ok(Self::new(data[0], &data[header_len..end]))
    }

    /// Decode consecutive records until fewer than a header's worth of bytes remain
    pub fn parse_all(mut data: &[u8]) -> Result<Vec<Self>> {
        let mut records = Vec::new();
        while data.len() >= SHORT_HEADER_LEN {
            let tlv = Self::from_bytes(data)?;
            data = &data[tlv.encoded_len()..];
            records.push(tlv);
        }
        Ok(records)
    }
}

/// Header length implied by the first length byte of a record
pub fn header_len(first_len_byte: u8) -> usize {
    if first_len_byte == LONG_LENGTH_MARKER {
        LONG_HEADER_LEN
    } else {
        SHORT_HEADER_LEN
    }
}

/// Value length declared by the header at the start of `data`, `None` while
/// the header is incomplete
pub fn value_len(data: &[u8]) -> Option<usize> {
    match data {
        [_, LONG_LENGTH_MARKER, hi, lo, ..] => Some(u16::from_be_bytes([*hi, *lo]) as usize),
        [_, LONG_LENGTH_MARKER, ..] => None,
        [_, len, ..] => Some(*len as usize),
        _ => None,
    }
}
