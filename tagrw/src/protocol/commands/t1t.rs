// tagrw/src/protocol/commands/t1t.rs

use crate::request::T1tRequest;
use crate::types::TlvType;

/// Type-1 engine commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum T1tCommand {
    Rid,
    ReadAll,
    Read { block: u8, index: u8 },
    WriteErase { block: u8, index: u8, data: u8 },
    WriteNoErase { block: u8, index: u8, data: u8 },
    ReadSegment { segment: u8 },
    Read8 { block: u8 },
    WriteErase8 { block: u8, data: [u8; 8] },
    WriteNoErase8 { block: u8, data: [u8; 8] },
    DetectNdef,
    ReadNdef { max_len: usize },
    WriteNdef(Vec<u8>),
    LocateTlv(TlvType),
    SetReadOnly { hard_lock: bool },
    Format,
    PresenceCheck,
}

impl T1tCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rid => "t1t rid",
            Self::ReadAll => "t1t rall",
            Self::Read { .. } => "t1t read",
            Self::WriteErase { .. } => "t1t write-e",
            Self::WriteNoErase { .. } => "t1t write-ne",
            Self::ReadSegment { .. } => "t1t rseg",
            Self::Read8 { .. } => "t1t read8",
            Self::WriteErase8 { .. } => "t1t write-e8",
            Self::WriteNoErase8 { .. } => "t1t write-ne8",
            Self::DetectNdef => "t1t detect ndef",
            Self::ReadNdef { .. } => "t1t read ndef",
            Self::WriteNdef(_) => "t1t write ndef",
            Self::LocateTlv(_) => "t1t locate tlv",
            Self::SetReadOnly { .. } => "t1t set read-only",
            Self::Format => "t1t format",
            Self::PresenceCheck => "t1t presence check",
        }
    }
}

impl From<T1tRequest> for T1tCommand {
    fn from(req: T1tRequest) -> Self {
        match req {
            T1tRequest::Rid => Self::Rid,
            T1tRequest::ReadAll => Self::ReadAll,
            T1tRequest::Read { block, index } => Self::Read { block, index },
            T1tRequest::Write {
                block,
                index,
                data,
                erase: true,
            } => Self::WriteErase { block, index, data },
            T1tRequest::Write {
                block,
                index,
                data,
                erase: false,
            } => Self::WriteNoErase { block, index, data },
            T1tRequest::ReadSegment { segment } => Self::ReadSegment { segment },
            T1tRequest::Read8 { block } => Self::Read8 { block },
            T1tRequest::Write8 {
                block,
                data,
                erase: true,
            } => Self::WriteErase8 { block, data },
            T1tRequest::Write8 {
                block,
                data,
                erase: false,
            } => Self::WriteNoErase8 { block, data },
        }
    }
}
