// tagrw/src/rw/session.rs

use crate::request::{Operation, OperationRequest};
use crate::rw::accumulator::NdefReadBuffer;
use crate::types::{ActivationParams, Family, I93Uid, TagParams, TagTarget};
use crate::{Error, Result};
use derive_more::Display;

/// Whether the tag is known to hold NDEF data.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
pub enum NdefState {
    #[default]
    #[display(fmt = "unknown")]
    Unknown,
    #[display(fmt = "ndef")]
    True,
    #[display(fmt = "not ndef")]
    False,
}

/// Lock/memory control TLV search progress. Bits are only ever set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TlvState {
    lock: bool,
    mem: bool,
}

impl TlvState {
    pub fn lock_located(&self) -> bool {
        self.lock
    }

    pub fn mem_located(&self) -> bool {
        self.mem
    }

    pub fn is_complete(&self) -> bool {
        self.lock && self.mem
    }

    pub fn is_not_started(&self) -> bool {
        !self.lock && !self.mem
    }

    pub fn mark_lock(&mut self) {
        self.lock = true;
    }

    pub fn mark_mem(&mut self) {
        self.mem = true;
    }

    pub fn mark_complete(&mut self) {
        self.lock = true;
        self.mem = true;
    }

    /// Progress made by a lock TLV probe issued for set-read-only: the
    /// first one records the lock TLV, any later one completes the search.
    pub fn advance_for_read_only(&mut self) {
        if self.is_not_started() {
            self.mark_lock();
        } else {
            self.mark_complete();
        }
    }
}

/// Holds at most one request deferred behind an automatic presence check.
#[derive(Debug, Default)]
pub struct PendingSlot {
    request: Option<OperationRequest>,
}

impl PendingSlot {
    pub fn stash(&mut self, request: OperationRequest) -> Result<()> {
        if self.request.is_some() {
            return Err(Error::PendingSlotOccupied);
        }
        self.request = Some(request);
        Ok(())
    }

    pub fn take(&mut self) -> Option<OperationRequest> {
        self.request.take()
    }

    pub fn is_occupied(&self) -> bool {
        self.request.is_some()
    }

    pub fn peek(&self) -> Option<&OperationRequest> {
        self.request.as_ref()
    }
}

/// ISO 15693 scratch filled during activation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct I93Scratch {
    pub uid: I93Uid,
    pub block_size: u8,
    pub num_blocks: u16,
    pub afi_location: u16,
    pub dsfid: u8,
}

/// State of the activated tag. Owned by the `ReaderWriter` and reset on
/// every activation.
#[derive(Debug, Default)]
pub struct Session {
    pub target: TagTarget,

    pub activated: bool,
    /// An operation is in flight.
    pub busy: bool,
    /// The in-flight operation is the automatic presence check.
    pub auto_presence_check_busy: bool,
    pub not_exclusive_rf: bool,
    pub tag_read_only: bool,
    /// The activated notification waits for an activation step.
    pub activation_ntf_pending: bool,
    /// Unsupported protocol; frames bypass the engine.
    pub raw_mode: bool,

    pub current_op: Option<Operation>,
    pub ndef_state: NdefState,
    pub tlv_state: TlvState,
    pub ndef_cur_size: usize,
    pub ndef_max_size: usize,

    /// Message of the in-flight NDEF write.
    pub write_source: Vec<u8>,
    pub read_buffer: Option<NdefReadBuffer>,
    pub pending: PendingSlot,
    pub hard_lock: bool,

    /// Activated-notification parameters gathered so far.
    pub pending_params: TagParams,
    pub i93: I93Scratch,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh session for a newly activated tag.
    pub fn reset_for(&mut self, params: &ActivationParams) {
        *self = Self {
            target: params.target(),
            activated: true,
            not_exclusive_rf: params.not_exclusive_rf,
            ..Self::default()
        };
    }

    pub fn family(&self) -> Option<Family> {
        self.target.family()
    }

    /// Drop the read buffer, if any. Returns whether one was held.
    pub fn release_read_buffer(&mut self) -> bool {
        self.read_buffer.take().is_some()
    }

    pub fn is_current(&self, op: Operation) -> bool {
        self.current_op == Some(op)
    }
}
