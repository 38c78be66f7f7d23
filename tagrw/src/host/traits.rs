// tagrw/src/host/traits.rs

use crate::notify::Notification;
use crate::types::Status;
use crate::Result;
use std::time::Duration;

/// Outward notification transport.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Consumer of NDEF messages read from the tag.
pub trait NdefHandler {
    /// Syntactic check of a message before it is written. The default
    /// accepts everything.
    fn validate(&mut self, _message: &[u8]) -> Result<()> {
        Ok(())
    }

    /// Receive a read message. On failure `message` is empty.
    fn handle_message(&mut self, status: Status, message: &[u8]);
}

/// RF discovery/activation layer.
pub trait RfControl {
    /// Drop the link and return to discovery.
    fn deactivate(&mut self) -> Result<()>;

    /// Sleep/wake liveness probe for tags the engine cannot check. The
    /// result comes back through `ReaderWriter::handle_generic_presence_check_rsp`.
    fn presence_check(&mut self) -> Result<()>;

    /// Send a frame as-is on the RF connection.
    fn send_raw_frame(&mut self, frame: &[u8]) -> Result<()>;

    /// Route incoming frames to `ReaderWriter::handle_raw_mode_event`
    /// while enabled. Default does nothing.
    fn set_raw_mode(&mut self, _enabled: bool) -> Result<()> {
        Ok(())
    }
}

/// Single shared presence-check timer. `start` restarts a running timer.
pub trait PresenceTimer {
    fn start(&mut self, interval: Duration);
    fn stop(&mut self);
}
