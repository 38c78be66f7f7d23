// tagrw/src/rw/translate/mod.rs
//! Per-family completion translators. Each consumes one engine event,
//! updates the session, completes the command once and then either
//! notifies or chains the next command.

mod i93;
mod t1t;
mod t2t;
mod t3t;
mod t4t;

use crate::notify::Notification;
use crate::protocol::DataEvent;
use crate::request::Operation;
use crate::rw::ReaderWriter;
use crate::rw::session::NdefState;
use crate::types::Status;
use log::debug;

impl ReaderWriter {
    /// Read primitive done: forward the bytes, then read-complete.
    fn complete_read_primitive(&mut self, event: DataEvent) {
        let status = event.status;
        self.send_data_to_upper(event);
        self.command_complete();
        self.notify(Notification::ReadComplete { status });
    }

    /// Write primitive done. The tag content changed, so NDEF detection
    /// has to run again.
    fn complete_write_primitive(&mut self, event: DataEvent) {
        let status = event.status;
        self.send_data_to_upper(event);
        self.command_complete();
        self.session.ndef_state = NdefState::Unknown;
        self.notify(Notification::WriteComplete { status });
    }

    /// Response to a raw frame. Only a raw frame send waits for it.
    fn handle_raw_frame(&mut self, event: DataEvent) {
        self.send_data_to_upper(event);
        if self.session.is_current(Operation::SendRawFrame) {
            self.command_complete();
        } else {
            debug!("raw frame response outside a raw frame send");
        }
    }

    fn complete_format(&mut self, status: Status) {
        self.command_complete();
        if status.is_ok() {
            self.session.ndef_state = NdefState::Unknown;
        }
        self.notify(Notification::FormatComplete {
            status: status.ok_or_failed(),
        });
    }

    /// NDEF read reported by the engine in a single event.
    fn complete_whole_ndef_read(&mut self, event: DataEvent) {
        if event.status.is_ok() {
            if let Some(data) = &event.data {
                self.store_ndef_segment(data);
            }
        }
        self.complete_ndef_read(event.status);
    }

    /// Segment of a multi-part NDEF read.
    fn store_ndef_data(&mut self, event: &DataEvent) {
        if !event.status.is_ok() {
            debug!("NDEF segment with status {} skipped", event.status);
            return;
        }
        if let Some(data) = &event.data {
            self.store_ndef_segment(data);
        }
    }
}

/// Failure events may carry OK; a failure is never reported as success.
fn failure_status(status: Status) -> Status {
    if status.is_ok() { Status::Failed } else { status }
}
