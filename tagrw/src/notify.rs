// tagrw/src/notify.rs
//! Application notifications. Every logical operation ends in exactly one
//! of these.

use crate::types::{I93SysInfo, I93Uid, NdefFlags, Protocol, Status, TagParams};

/// Result of NDEF detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NdefDetectResult {
    pub status: Status,
    pub protocol: Protocol,
    pub cur_size: usize,
    pub max_size: usize,
    pub flags: NdefFlags,
}

impl NdefDetectResult {
    /// Zero sizes and UNKNOWN flags, used when nothing is known about the tag.
    pub fn unknown(status: Status, protocol: Protocol) -> Self {
        Self {
            status,
            protocol,
            cur_size: 0,
            max_size: 0,
            flags: NdefFlags::UNKNOWN,
        }
    }
}

/// Result of a lock/memory control TLV search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TlvResult {
    pub status: Status,
    pub protocol: Protocol,
    pub num_bytes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum I93CommandParams {
    #[default]
    None,
    Inventory {
        dsfid: u8,
        uid: I93Uid,
    },
    SystemInfo(I93SysInfo),
    ErrorCode(u8),
}

/// Completion of an ISO 15693 command, echoing the command code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct I93CommandResult {
    pub status: Status,
    pub command: u8,
    pub params: I93CommandParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Notification {
    Activated { status: Status, params: TagParams },
    NdefDetect(NdefDetectResult),
    ReadComplete { status: Status },
    WriteComplete { status: Status },
    TlvDetect(TlvResult),
    FormatComplete { status: Status },
    SelectComplete { status: Status },
    SetTagReadOnly { status: Status },
    PresenceCheck { status: Status },
    InterfaceError { status: Status },
    I93CommandComplete(I93CommandResult),
    /// Raw data from a primitive read, a raw frame response or raw mode.
    Data { status: Status, data: Vec<u8> },
}

impl Notification {
    pub fn status(&self) -> Status {
        match self {
            Self::Activated { status, .. }
            | Self::ReadComplete { status }
            | Self::WriteComplete { status }
            | Self::FormatComplete { status }
            | Self::SelectComplete { status }
            | Self::SetTagReadOnly { status }
            | Self::PresenceCheck { status }
            | Self::InterfaceError { status }
            | Self::Data { status, .. } => *status,
            Self::NdefDetect(result) => result.status,
            Self::TlvDetect(result) => result.status,
            Self::I93CommandComplete(result) => result.status,
        }
    }

    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Activated { .. } => "activated",
            Self::NdefDetect(_) => "ndef-detect",
            Self::ReadComplete { .. } => "read-complete",
            Self::WriteComplete { .. } => "write-complete",
            Self::TlvDetect(_) => "tlv-detect",
            Self::FormatComplete { .. } => "format-complete",
            Self::SelectComplete { .. } => "select-complete",
            Self::SetTagReadOnly { .. } => "set-tag-ro",
            Self::PresenceCheck { .. } => "presence-check",
            Self::InterfaceError { .. } => "interface-error",
            Self::I93CommandComplete(_) => "i93-command-complete",
            Self::Data { .. } => "data",
        }
    }
}
