// tagrw/src/protocol/events/i93.rs

use super::{DataEvent, NdefDetectEvent};
use crate::types::{I93SysInfo, I93Uid, Status};

/// ISO 15693 engine events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I93Event {
    NdefDetect(NdefDetectEvent),
    NdefRead(DataEvent),
    NdefReadComplete(DataEvent),
    NdefReadFail { status: Status },
    NdefUpdateComplete,
    NdefUpdateFail { status: Status },
    RawFrame(DataEvent),
    InterfaceError { status: Status },
    PresenceCheck { status: Status },
    FormatComplete { status: Status },
    SetTagReadOnly { status: Status },
    Inventory {
        status: Status,
        dsfid: u8,
        uid: I93Uid,
    },
    /// Response to block read or multi block security status
    Data(DataEvent),
    SystemInfo { status: Status, info: I93SysInfo },
    CommandComplete {
        status: Status,
        command: u8,
        error_code: u8,
    },
}

/// Pick the AFI byte out of the block that holds it.
pub fn afi_from_block(block: &[u8], afi_location: u16, block_size: u8) -> Option<u8> {
    if block_size == 0 {
        return None;
    }
    let offset = usize::from(afi_location % u16::from(block_size));
    block.get(offset).copied()
}
