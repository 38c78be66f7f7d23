// tagrw/src/error.rs

use crate::types::{Protocol, Status};
use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no tag is activated")]
    NotActivated,

    #[error("{operation} is not supported for protocol {protocol}")]
    ProtocolMismatch {
        operation: &'static str,
        protocol: Protocol,
    },

    #[error("engine rejected command: {command}")]
    EngineRejected { command: &'static str },

    #[error("pending slot already holds a deferred request")]
    PendingSlotOccupied,

    #[error("unable to allocate NDEF read buffer (size={size})")]
    AllocationFailed { size: usize },

    #[error("segment of {len} bytes exceeds remaining capacity {remaining}")]
    OversizedSegment { len: usize, remaining: usize },

    #[error("tag is read-only")]
    ReadOnly,

    #[error("NDEF message too large: requested {requested}, tag max {max}")]
    BufferFull { requested: usize, max: usize },

    #[error("tag does not contain an NDEF message")]
    NotNdef,

    #[error("invalid NDEF message: {0}")]
    InvalidNdef(String),

    #[error("rf control error: {0}")]
    RfControl(String),

    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

impl Error {
    /// Status reported to the application when this error ends an operation.
    pub fn status(&self) -> Status {
        match self {
            Self::BufferFull { .. } => Status::BufferFull,
            _ => Status::Failed,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
