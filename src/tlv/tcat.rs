// file: src/tlv/tcat.rs
// version: 1.0.0
// guid: c47a2e91-6b3d-4a08-9f52-1d8e6b0c3a77

//! Known TCAT TLV type codes

use crate::error::TcatError;
use std::fmt;

/// TLV types understood by TCAT devices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TcatTlvType {
    ResponseWithStatus,
    ResponseWithPayload,
    ResponseEvent,
    GetNetworkName,
    Disconnect,
    Ping,
    GetDeviceId,
    GetExtPanId,
    GetProvisioningUrl,
    PresentPskdHash,
    PresentPskcHash,
    PresentInstallCodeHash,
    RequestRandomNumChallenge,
    RequestPskdHash,
    ActiveDataset,
    GetCommissionerCertificate,
    ThreadStart,
    ThreadStop,
    GetActiveDataset,
    GetDiagnosticTlvs,
    Decommission,
    GetApplicationLayers,
    Application,
}

impl TcatTlvType {
    /// Every known type in ascending code order
    pub const ALL: [TcatTlvType; 23] = [
        TcatTlvType::ResponseWithStatus,
        TcatTlvType::ResponseWithPayload,
        TcatTlvType::ResponseEvent,
        TcatTlvType::GetNetworkName,
        TcatTlvType::Disconnect,
        TcatTlvType::Ping,
        TcatTlvType::GetDeviceId,
        TcatTlvType::GetExtPanId,
        TcatTlvType::GetProvisioningUrl,
        TcatTlvType::PresentPskdHash,
        TcatTlvType::PresentPskcHash,
        TcatTlvType::PresentInstallCodeHash,
        TcatTlvType::RequestRandomNumChallenge,
        TcatTlvType::RequestPskdHash,
        TcatTlvType::ActiveDataset,
        TcatTlvType::GetCommissionerCertificate,
        TcatTlvType::ThreadStart,
        TcatTlvType::ThreadStop,
        TcatTlvType::GetActiveDataset,
        TcatTlvType::GetDiagnosticTlvs,
        TcatTlvType::Decommission,
        TcatTlvType::GetApplicationLayers,
        TcatTlvType::Application,
    ];

    /// Wire code of the type
    pub fn code(&self) -> u8 {
        match self {
            TcatTlvType::ResponseWithStatus => 0x01,
            TcatTlvType::ResponseWithPayload => 0x02,
            TcatTlvType::ResponseEvent => 0x03,
            TcatTlvType::GetNetworkName => 0x08,
            TcatTlvType::Disconnect => 0x09,
            TcatTlvType::Ping => 0x0A,
            TcatTlvType::GetDeviceId => 0x0B,
            TcatTlvType::GetExtPanId => 0x0C,
            TcatTlvType::GetProvisioningUrl => 0x0D,
            TcatTlvType::PresentPskdHash => 0x10,
            TcatTlvType::PresentPskcHash => 0x11,
            TcatTlvType::PresentInstallCodeHash => 0x12,
            TcatTlvType::RequestRandomNumChallenge => 0x13,
            TcatTlvType::RequestPskdHash => 0x14,
            TcatTlvType::ActiveDataset => 0x20,
            TcatTlvType::GetCommissionerCertificate => 0x25,
            TcatTlvType::ThreadStart => 0x27,
            TcatTlvType::ThreadStop => 0x28,
            TcatTlvType::GetActiveDataset => 0x40,
            TcatTlvType::GetDiagnosticTlvs => 0x42,
            TcatTlvType::Decommission => 0x60,
            TcatTlvType::GetApplicationLayers => 0x61,
            TcatTlvType::Application => 0x82,
        }
    }

    /// Display name used in listings and pretty printed responses
    pub fn name(&self) -> &'static str {
        match self {
            TcatTlvType::ResponseWithStatus => "RESPONSE_W_STATUS",
            TcatTlvType::ResponseWithPayload => "RESPONSE_W_PAYLOAD",
            TcatTlvType::ResponseEvent => "RESPONSE_EVENT",
            TcatTlvType::GetNetworkName => "GET_NETWORK_NAME",
            TcatTlvType::Disconnect => "DISCONNECT",
            TcatTlvType::Ping => "PING",
            TcatTlvType::GetDeviceId => "GET_DEVICE_ID",
            TcatTlvType::GetExtPanId => "GET_EXT_PANID",
            TcatTlvType::GetProvisioningUrl => "GET_PROVISIONING_URL",
            TcatTlvType::PresentPskdHash => "PRESENT_PSKD_HASH",
            TcatTlvType::PresentPskcHash => "PRESENT_PSKC_HASH",
            TcatTlvType::PresentInstallCodeHash => "PRESENT_INSTALL_CODE_HASH",
            TcatTlvType::RequestRandomNumChallenge => "REQUEST_RANDOM_NUM_CHALLENGE",
            TcatTlvType::RequestPskdHash => "REQUEST_PSKD_HASH",
            TcatTlvType::ActiveDataset => "ACTIVE_DATASET",
            TcatTlvType::GetCommissionerCertificate => "GET_COMMISSIONER_CERTIFICATE",
            TcatTlvType::ThreadStart => "THREAD_START",
            TcatTlvType::ThreadStop => "THREAD_STOP",
            TcatTlvType::GetActiveDataset => "GET_ACTIVE_DATASET",
            TcatTlvType::GetDiagnosticTlvs => "GET_DIAGNOSTIC_TLVS",
            TcatTlvType::Decommission => "DECOMMISSION",
            TcatTlvType::GetApplicationLayers => "GET_APPLICATION_LAYERS",
            TcatTlvType::Application => "APPLICATION",
        }
    }

    /// One `{code:#x}\t{NAME}` line per known type
    pub fn listing() -> String {
        Self::ALL
            .iter()
            .map(|t| format!("{:#x}\t{}", t.code(), t.name()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TryFrom<u8> for TcatTlvType {
    type Error = TcatError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.code() == code)
            .ok_or_else(|| TcatError::invalid_argument(format!("{:#x} is not a valid TcatTlvType", code)))
    }
}

impl fmt::Display for TcatTlvType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
