// tagrw/src/protocol/events/t4t.rs

use super::{DataEvent, NdefDetectEvent};
use crate::types::Status;

/// Type-4 engine events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum T4tEvent {
    NdefDetect(NdefDetectEvent),
    FormatComplete {
        status: Status,
        cur_size: usize,
        max_size: usize,
    },
    /// One segment of NDEF data
    NdefRead(DataEvent),
    /// Last segment of NDEF data
    NdefReadComplete(DataEvent),
    NdefReadFail { status: Status },
    NdefUpdateComplete,
    NdefUpdateFail { status: Status },
    RawFrame(DataEvent),
    PresenceCheck { status: Status },
    InterfaceError { status: Status },
}
