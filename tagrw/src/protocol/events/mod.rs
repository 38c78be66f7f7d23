// tagrw/src/protocol/events/mod.rs

pub mod i93;
pub mod t1t;
pub mod t2t;
pub mod t3t;
pub mod t4t;

pub use i93::I93Event;
pub use t1t::T1tEvent;
pub use t2t::T2tEvent;
pub use t3t::T3tEvent;
pub use t4t::T4tEvent;

use crate::types::{Family, NdefFlags, Status};

/// Completion reported by the engine: family discriminant plus the
/// family's own event enum. Per-family events live in
/// `protocol::events::<family>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    T1t(T1tEvent),
    T2t(T2tEvent),
    T3t(T3tEvent),
    T4t(T4tEvent),
    I93(I93Event),
}

impl EngineEvent {
    pub fn family(&self) -> Family {
        match self {
            Self::T1t(_) => Family::T1t,
            Self::T2t(_) => Family::T2t,
            Self::T3t(_) => Family::T3t,
            Self::T4t(_) => Family::T4t,
            Self::I93(_) => Family::I93,
        }
    }
}

/// NDEF detection outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NdefDetectEvent {
    pub status: Status,
    pub cur_size: usize,
    pub max_size: usize,
    pub flags: NdefFlags,
}

impl NdefDetectEvent {
    pub fn ok(cur_size: usize, max_size: usize, flags: NdefFlags) -> Self {
        Self {
            status: Status::Ok,
            cur_size,
            max_size,
            flags,
        }
    }

    pub fn failed(status: Status) -> Self {
        Self {
            status,
            cur_size: 0,
            max_size: 0,
            flags: NdefFlags::UNKNOWN,
        }
    }
}

/// TLV search outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlvEvent {
    pub status: Status,
    pub num_bytes: usize,
}

/// Status plus optional response bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataEvent {
    pub status: Status,
    pub data: Option<Vec<u8>>,
}

impl DataEvent {
    pub fn ok(data: impl Into<Vec<u8>>) -> Self {
        Self {
            status: Status::Ok,
            data: Some(data.into()),
        }
    }

    pub fn status_only(status: Status) -> Self {
        Self { status, data: None }
    }
}
