// tagrw/src/protocol/commands/mod.rs

pub mod i93;
pub mod t1t;
pub mod t2t;
pub mod t3t;
pub mod t4t;

pub use i93::I93Command;
pub use t1t::T1tCommand;
pub use t2t::T2tCommand;
pub use t3t::T3tCommand;
pub use t4t::T4tCommand;

use crate::types::{Family, TagTarget, TlvType};
use crate::{Error, Result};

/// Command handed to the engine. New per-family commands are added to the
/// enum in `protocol::commands::<family>.rs`.
///
/// The constructors pick the family command for the active tag and fail
/// with `ProtocolMismatch` when the family has no such command, so a
/// mismatch never reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    T1t(T1tCommand),
    T2t(T2tCommand),
    T3t(T3tCommand),
    T4t(T4tCommand),
    I93(I93Command),
}

impl EngineCommand {
    pub fn family(&self) -> Family {
        match self {
            Self::T1t(_) => Family::T1t,
            Self::T2t(_) => Family::T2t,
            Self::T3t(_) => Family::T3t,
            Self::T4t(_) => Family::T4t,
            Self::I93(_) => Family::I93,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::T1t(c) => c.name(),
            Self::T2t(c) => c.name(),
            Self::T3t(c) => c.name(),
            Self::T4t(c) => c.name(),
            Self::I93(c) => c.name(),
        }
    }

    pub fn detect_ndef(target: TagTarget) -> Result<Self> {
        Ok(match family_of(target, "detect NDEF")? {
            Family::T1t => Self::T1t(T1tCommand::DetectNdef),
            Family::T2t => Self::T2t(T2tCommand::DetectNdef),
            Family::T3t => Self::T3t(T3tCommand::DetectNdef),
            Family::T4t => Self::T4t(T4tCommand::DetectNdef),
            Family::I93 => Self::I93(I93Command::DetectNdef),
        })
    }

    /// NDEF read of a message of `max_len` bytes.
    pub fn read_ndef(target: TagTarget, max_len: usize) -> Result<Self> {
        Ok(match family_of(target, "read NDEF")? {
            Family::T1t => Self::T1t(T1tCommand::ReadNdef { max_len }),
            Family::T2t => Self::T2t(T2tCommand::ReadNdef { max_len }),
            Family::T3t => Self::T3t(T3tCommand::CheckNdef),
            Family::T4t => Self::T4t(T4tCommand::ReadNdef),
            Family::I93 => Self::I93(I93Command::ReadNdef),
        })
    }

    pub fn write_ndef(target: TagTarget, message: Vec<u8>) -> Result<Self> {
        Ok(match family_of(target, "write NDEF")? {
            Family::T1t => Self::T1t(T1tCommand::WriteNdef(message)),
            Family::T2t => Self::T2t(T2tCommand::WriteNdef(message)),
            Family::T3t => Self::T3t(T3tCommand::UpdateNdef(message)),
            Family::T4t => Self::T4t(T4tCommand::UpdateNdef(message)),
            Family::I93 => Self::I93(I93Command::UpdateNdef(message)),
        })
    }

    /// Family liveness probe. Tags without one are checked by the RF
    /// layer's sleep/wake probe instead.
    pub fn presence_check(target: TagTarget) -> Result<Self> {
        Ok(match family_of(target, "presence check")? {
            Family::T1t => Self::T1t(T1tCommand::PresenceCheck),
            Family::T2t => Self::T2t(T2tCommand::PresenceCheck),
            Family::T3t => Self::T3t(T3tCommand::PresenceCheck),
            Family::T4t => Self::T4t(T4tCommand::PresenceCheck),
            Family::I93 => Self::I93(I93Command::PresenceCheck),
        })
    }

    pub fn format(target: TagTarget) -> Result<Self> {
        Ok(match family_of(target, "format")? {
            Family::T1t => Self::T1t(T1tCommand::Format),
            Family::T2t => Self::T2t(T2tCommand::Format),
            Family::T3t => Self::T3t(T3tCommand::Format),
            Family::T4t => Self::T4t(T4tCommand::Format),
            Family::I93 => Self::I93(I93Command::Format),
        })
    }

    pub fn locate_tlv(target: TagTarget, tlv: TlvType) -> Result<Self> {
        match family_of(target, "locate TLV")? {
            Family::T1t => Ok(Self::T1t(T1tCommand::LocateTlv(tlv))),
            Family::T2t => Ok(Self::T2t(T2tCommand::LocateTlv(tlv))),
            _ => Err(mismatch(target, "locate TLV")),
        }
    }

    /// Type-3 and Type-4 tags define no transition to read-only.
    pub fn set_read_only(target: TagTarget, hard_lock: bool) -> Result<Self> {
        match family_of(target, "set read-only")? {
            Family::T1t => Ok(Self::T1t(T1tCommand::SetReadOnly { hard_lock })),
            Family::T2t => Ok(Self::T2t(T2tCommand::SetReadOnly { hard_lock })),
            Family::I93 => Ok(Self::I93(I93Command::SetReadOnly)),
            _ => Err(mismatch(target, "set read-only")),
        }
    }

    pub fn t1t(target: TagTarget, command: T1tCommand) -> Result<Self> {
        expect_family(target, Family::T1t, command.name())?;
        Ok(Self::T1t(command))
    }

    pub fn t2t(target: TagTarget, command: T2tCommand) -> Result<Self> {
        expect_family(target, Family::T2t, command.name())?;
        Ok(Self::T2t(command))
    }

    pub fn t3t(target: TagTarget, command: T3tCommand) -> Result<Self> {
        expect_family(target, Family::T3t, command.name())?;
        Ok(Self::T3t(command))
    }

    pub fn i93(target: TagTarget, command: I93Command) -> Result<Self> {
        expect_family(target, Family::I93, command.name())?;
        Ok(Self::I93(command))
    }
}

fn mismatch(target: TagTarget, operation: &'static str) -> Error {
    Error::ProtocolMismatch {
        operation,
        protocol: target.protocol,
    }
}

fn family_of(target: TagTarget, operation: &'static str) -> Result<Family> {
    target.family().ok_or_else(|| mismatch(target, operation))
}

fn expect_family(target: TagTarget, family: Family, operation: &'static str) -> Result<()> {
    match target.family() {
        Some(f) if f == family => Ok(()),
        _ => Err(mismatch(target, operation)),
    }
}
