// tagrw/src/protocol/events/t2t.rs

use super::{DataEvent, NdefDetectEvent, TlvEvent};
use crate::types::Status;

/// Type-2 engine events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum T2tEvent {
    ReadComplete(DataEvent),
    WriteComplete { status: Status },
    SelectComplete { status: Status },
    NdefDetect(NdefDetectEvent),
    TlvDetect(TlvEvent),
    NdefRead(DataEvent),
    NdefWrite { status: Status },
    SetTagReadOnly { status: Status },
    RawFrame(DataEvent),
    PresenceCheck { status: Status },
    FormatComplete { status: Status },
    InterfaceError { status: Status },
}
