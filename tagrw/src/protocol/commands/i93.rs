// tagrw/src/protocol/commands/i93.rs

use crate::request::I93Request;

/// ISO 15693 engine commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I93Command {
    /// One of the vicinity commands, passed through as requested
    Vicinity(I93Request),
    DetectNdef,
    ReadNdef,
    UpdateNdef(Vec<u8>),
    Format,
    SetReadOnly,
    PresenceCheck,
}

impl I93Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Vicinity(req) => match req {
                I93Request::Inventory { .. } => "i93 inventory",
                I93Request::StayQuiet => "i93 stay quiet",
                I93Request::ReadSingleBlock { .. } => "i93 read single block",
                I93Request::WriteSingleBlock { .. } => "i93 write single block",
                I93Request::LockBlock { .. } => "i93 lock block",
                I93Request::ReadMultipleBlocks { .. } => "i93 read multiple blocks",
                I93Request::WriteMultipleBlocks { .. } => "i93 write multiple blocks",
                I93Request::Select { .. } => "i93 select",
                I93Request::ResetToReady => "i93 reset to ready",
                I93Request::WriteAfi { .. } => "i93 write afi",
                I93Request::LockAfi => "i93 lock afi",
                I93Request::WriteDsfid { .. } => "i93 write dsfid",
                I93Request::LockDsfid => "i93 lock dsfid",
                I93Request::GetSystemInfo { .. } => "i93 get system info",
                I93Request::GetMultiBlockSecurityStatus { .. } => {
                    "i93 get multi block security status"
                }
            },
            Self::DetectNdef => "i93 detect ndef",
            Self::ReadNdef => "i93 read ndef",
            Self::UpdateNdef(_) => "i93 update ndef",
            Self::Format => "i93 format",
            Self::SetReadOnly => "i93 set read-only",
            Self::PresenceCheck => "i93 presence check",
        }
    }
}
