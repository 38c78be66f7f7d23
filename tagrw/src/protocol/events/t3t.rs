// tagrw/src/protocol/events/t3t.rs

use super::{DataEvent, NdefDetectEvent};
use crate::types::{Status, SystemCode};

/// Type-3 engine events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum T3tEvent {
    NdefDetect(NdefDetectEvent),
    UpdateComplete { status: Status },
    /// One segment of check data
    Check(DataEvent),
    CheckComplete { status: Status },
    RawFrame(DataEvent),
    PresenceCheck { status: Status },
    SystemCodes {
        status: Status,
        codes: Vec<SystemCode>,
    },
    FormatComplete { status: Status },
    InterfaceError { status: Status },
}
