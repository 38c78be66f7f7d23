// tagrw/src/protocol/events/t1t.rs

use super::{DataEvent, NdefDetectEvent, TlvEvent};
use crate::constants::{T1T_CMD_UID_LEN, T1T_HR_LEN};
use crate::types::Status;
use crate::{Error, Result};

/// Type-1 engine events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum T1tEvent {
    /// RID response: HR0 HR1 UID0..UID3
    Rid(DataEvent),
    ReadAllComplete(DataEvent),
    ReadComplete(DataEvent),
    ReadSegmentComplete(DataEvent),
    Read8Complete(DataEvent),
    WriteEraseComplete(DataEvent),
    WriteNoEraseComplete(DataEvent),
    WriteErase8Complete(DataEvent),
    WriteNoErase8Complete(DataEvent),
    TlvDetect(TlvEvent),
    NdefDetect(NdefDetectEvent),
    /// NDEF message read; the engine reports the whole message at once
    NdefRead(DataEvent),
    NdefWrite { status: Status },
    SetTagReadOnly { status: Status },
    RawFrame(DataEvent),
    PresenceCheck { status: Status },
    FormatComplete { status: Status },
    InterfaceError { status: Status },
}

/// Split a RID response into HR0/HR1 and UID0-3.
pub fn parse_rid(data: &[u8]) -> Result<([u8; T1T_HR_LEN], Vec<u8>)> {
    let needed = T1T_HR_LEN + T1T_CMD_UID_LEN;
    if data.len() < needed {
        return Err(Error::InvalidLength {
            expected: needed,
            actual: data.len(),
        });
    }
    let mut hr = [0u8; T1T_HR_LEN];
    hr.copy_from_slice(&data[..T1T_HR_LEN]);
    Ok((hr, data[T1T_HR_LEN..needed].to_vec()))
}
