// tagrw/src/protocol/commands/t3t.rs

use crate::request::T3tRequest;
use crate::types::T3tBlockDesc;

/// Type-3 (FeliCa) engine commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum T3tCommand {
    Check {
        blocks: Vec<T3tBlockDesc>,
    },
    Update {
        blocks: Vec<T3tBlockDesc>,
        data: Vec<u8>,
    },
    GetSystemCodes,
    DetectNdef,
    /// NDEF read; segments arrive as check events
    CheckNdef,
    UpdateNdef(Vec<u8>),
    Format,
    PresenceCheck,
}

impl T3tCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Check { .. } => "t3t check",
            Self::Update { .. } => "t3t update",
            Self::GetSystemCodes => "t3t get system codes",
            Self::DetectNdef => "t3t detect ndef",
            Self::CheckNdef => "t3t check ndef",
            Self::UpdateNdef(_) => "t3t update ndef",
            Self::Format => "t3t format",
            Self::PresenceCheck => "t3t presence check",
        }
    }
}

impl From<T3tRequest> for T3tCommand {
    fn from(req: T3tRequest) -> Self {
        match req {
            T3tRequest::Check { blocks } => Self::Check { blocks },
            T3tRequest::Update { blocks, data } => Self::Update { blocks, data },
        }
    }
}
