// tagrw/src/protocol/commands/t2t.rs

use crate::request::T2tRequest;
use crate::types::TlvType;

/// Type-2 engine commands. Only issued for NFC Forum Type-2 tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum T2tCommand {
    Read { block: u8 },
    Write { block: u8, data: [u8; 4] },
    SectorSelect { sector: u8 },
    DetectNdef,
    ReadNdef { max_len: usize },
    WriteNdef(Vec<u8>),
    LocateTlv(TlvType),
    SetReadOnly { hard_lock: bool },
    Format,
    PresenceCheck,
}

impl T2tCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Read { .. } => "t2t read",
            Self::Write { .. } => "t2t write",
            Self::SectorSelect { .. } => "t2t sector select",
            Self::DetectNdef => "t2t detect ndef",
            Self::ReadNdef { .. } => "t2t read ndef",
            Self::WriteNdef(_) => "t2t write ndef",
            Self::LocateTlv(_) => "t2t locate tlv",
            Self::SetReadOnly { .. } => "t2t set read-only",
            Self::Format => "t2t format",
            Self::PresenceCheck => "t2t presence check",
        }
    }
}

impl From<T2tRequest> for T2tCommand {
    fn from(req: T2tRequest) -> Self {
        match req {
            T2tRequest::Read { block } => Self::Read { block },
            T2tRequest::Write { block, data } => Self::Write { block, data },
            T2tRequest::SectorSelect { sector } => Self::SectorSelect { sector },
        }
    }
}
