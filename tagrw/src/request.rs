// tagrw/src/request.rs
//! Operation requests accepted by the reader/writer and the payload-free
//! operation tag tracked while one is in flight.

use crate::constants::*;
use crate::notify::{
    I93CommandParams, I93CommandResult, NdefDetectResult, Notification, TlvResult,
};
use crate::types::{I93Uid, Protocol, Status, T3tBlockDesc};

/// Type-1 primitives
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum T1tRequest {
    Rid,
    ReadAll,
    Read {
        block: u8,
        index: u8,
    },
    Write {
        block: u8,
        index: u8,
        data: u8,
        erase: bool,
    },
    ReadSegment {
        segment: u8,
    },
    Read8 {
        block: u8,
    },
    Write8 {
        block: u8,
        data: [u8; 8],
        erase: bool,
    },
}

impl T1tRequest {
    pub fn operation(&self) -> Operation {
        match self {
            Self::Rid => Operation::T1tRid,
            Self::ReadAll => Operation::T1tReadAll,
            Self::Read { .. } => Operation::T1tRead,
            Self::Write { .. } => Operation::T1tWrite,
            Self::ReadSegment { .. } => Operation::T1tReadSegment,
            Self::Read8 { .. } => Operation::T1tRead8,
            Self::Write8 { .. } => Operation::T1tWrite8,
        }
    }

    pub fn mutates_content(&self) -> bool {
        matches!(self, Self::Write { .. } | Self::Write8 { .. })
    }
}

/// Type-2 primitives
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum T2tRequest {
    Read { block: u8 },
    Write { block: u8, data: [u8; 4] },
    SectorSelect { sector: u8 },
}

impl T2tRequest {
    pub fn operation(&self) -> Operation {
        match self {
            Self::Read { .. } => Operation::T2tRead,
            Self::Write { .. } => Operation::T2tWrite,
            Self::SectorSelect { .. } => Operation::T2tSectorSelect,
        }
    }

    pub fn mutates_content(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}

/// Type-3 primitives, addressed by block descriptors
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum T3tRequest {
    Check {
        blocks: Vec<T3tBlockDesc>,
    },
    Update {
        blocks: Vec<T3tBlockDesc>,
        data: Vec<u8>,
    },
}

impl T3tRequest {
    pub fn operation(&self) -> Operation {
        match self {
            Self::Check { .. } => Operation::T3tCheck,
            Self::Update { .. } => Operation::T3tUpdate,
        }
    }

    pub fn mutates_content(&self) -> bool {
        matches!(self, Self::Update { .. })
    }
}

/// ISO 15693 commands
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum I93Request {
    Inventory { afi: u8, uid: Option<I93Uid> },
    StayQuiet,
    ReadSingleBlock { block: u8 },
    WriteSingleBlock { block: u8, data: Vec<u8> },
    LockBlock { block: u8 },
    ReadMultipleBlocks { first: u8, count: u16 },
    WriteMultipleBlocks { first: u8, count: u16, data: Vec<u8> },
    Select { uid: I93Uid },
    ResetToReady,
    WriteAfi { afi: u8 },
    LockAfi,
    WriteDsfid { dsfid: u8 },
    LockDsfid,
    GetSystemInfo { uid: Option<I93Uid> },
    GetMultiBlockSecurityStatus { first: u8, count: u16 },
}

impl I93Request {
    /// Return the ISO 15693 command code.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::Inventory { .. } => I93_CMD_INVENTORY,
            Self::StayQuiet => I93_CMD_STAY_QUIET,
            Self::ReadSingleBlock { .. } => I93_CMD_READ_SINGLE_BLOCK,
            Self::WriteSingleBlock { .. } => I93_CMD_WRITE_SINGLE_BLOCK,
            Self::LockBlock { .. } => I93_CMD_LOCK_BLOCK,
            Self::ReadMultipleBlocks { .. } => I93_CMD_READ_MULTI_BLOCK,
            Self::WriteMultipleBlocks { .. } => I93_CMD_WRITE_MULTI_BLOCK,
            Self::Select { .. } => I93_CMD_SELECT,
            Self::ResetToReady => I93_CMD_RESET_TO_READY,
            Self::WriteAfi { .. } => I93_CMD_WRITE_AFI,
            Self::LockAfi => I93_CMD_LOCK_AFI,
            Self::WriteDsfid { .. } => I93_CMD_WRITE_DSFID,
            Self::LockDsfid => I93_CMD_LOCK_DSFID,
            Self::GetSystemInfo { .. } => I93_CMD_GET_SYS_INFO,
            Self::GetMultiBlockSecurityStatus { .. } => I93_CMD_GET_MULTI_BLK_SEC,
        }
    }

    pub fn mutates_content(&self) -> bool {
        matches!(
            self,
            Self::WriteSingleBlock { .. } | Self::WriteMultipleBlocks { .. }
        )
    }
}

/// Operation requested by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperationRequest {
    DetectNdef,
    ReadNdef,
    WriteNdef(Vec<u8>),
    SendRawFrame(Vec<u8>),
    PresenceCheck,
    Format,
    DetectLockTlv,
    DetectMemTlv,
    SetReadOnly { hard_lock: bool },
    T1t(T1tRequest),
    T2t(T2tRequest),
    T3t(T3tRequest),
    I93(I93Request),
}

impl OperationRequest {
    pub fn operation(&self) -> Operation {
        match self {
            Self::DetectNdef => Operation::DetectNdef,
            Self::ReadNdef => Operation::ReadNdef,
            Self::WriteNdef(_) => Operation::WriteNdef,
            Self::SendRawFrame(_) => Operation::SendRawFrame,
            Self::PresenceCheck => Operation::PresenceCheck,
            Self::Format => Operation::Format,
            Self::DetectLockTlv => Operation::DetectLockTlv,
            Self::DetectMemTlv => Operation::DetectMemTlv,
            Self::SetReadOnly { .. } => Operation::SetReadOnly,
            Self::T1t(req) => req.operation(),
            Self::T2t(req) => req.operation(),
            Self::T3t(req) => req.operation(),
            Self::I93(req) => Operation::I93(req.command_code()),
        }
    }
}

/// Operation currently in flight. Carries no payload; continuation data
/// lives in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    DetectNdef,
    ReadNdef,
    WriteNdef,
    SendRawFrame,
    PresenceCheck,
    Format,
    DetectLockTlv,
    DetectMemTlv,
    SetReadOnly,
    T1tRid,
    T1tReadAll,
    T1tRead,
    T1tWrite,
    T1tReadSegment,
    T1tRead8,
    T1tWrite8,
    T2tRead,
    T2tWrite,
    T2tSectorSelect,
    T3tCheck,
    T3tUpdate,
    T3tGetSystemCodes,
    /// ISO 15693 command, by command code
    I93(u8),
}

impl Operation {
    /// Notification category answering this operation when it is turned
    /// away or fails to start. Raw frames and the post-activation system
    /// code fetch have none.
    pub fn notification_kind(self) -> Option<NotificationKind> {
        use Operation::*;
        let kind = match self {
            DetectNdef => NotificationKind::NdefDetect,
            ReadNdef | T1tRid | T1tReadAll | T1tRead | T1tReadSegment | T1tRead8 | T2tRead
            | T3tCheck => NotificationKind::Read,
            WriteNdef | T1tWrite | T1tWrite8 | T2tWrite | T3tUpdate => NotificationKind::Write,
            Format => NotificationKind::Format,
            DetectLockTlv | DetectMemTlv => NotificationKind::TlvDetect,
            SetReadOnly => NotificationKind::SetReadOnly,
            T2tSectorSelect => NotificationKind::Select,
            PresenceCheck => NotificationKind::PresenceCheck,
            I93(code) => NotificationKind::I93Command(code),
            SendRawFrame | T3tGetSystemCodes => return None,
        };
        Some(kind)
    }
}

/// Notification categories used for synthetic BUSY and FAILED answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    NdefDetect,
    Read,
    Write,
    Format,
    TlvDetect,
    SetReadOnly,
    Select,
    PresenceCheck,
    I93Command(u8),
}

impl NotificationKind {
    /// Build the notification of this category with only a status filled in.
    pub fn notification(self, status: Status, protocol: Protocol) -> Notification {
        match self {
            Self::NdefDetect => Notification::NdefDetect(NdefDetectResult::unknown(status, protocol)),
            Self::Read => Notification::ReadComplete { status },
            Self::Write => Notification::WriteComplete { status },
            Self::Format => Notification::FormatComplete { status },
            Self::TlvDetect => Notification::TlvDetect(TlvResult {
                status,
                protocol,
                num_bytes: 0,
            }),
            Self::SetReadOnly => Notification::SetTagReadOnly { status },
            Self::Select => Notification::SelectComplete { status },
            Self::PresenceCheck => Notification::PresenceCheck { status },
            Self::I93Command(command) => Notification::I93CommandComplete(I93CommandResult {
                status,
                command,
                params: I93CommandParams::None,
            }),
        }
    }
}
