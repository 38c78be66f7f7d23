// tagrw/src/rw/read_only.rs
//! Read-only transition. Type-1 tags need their lock control TLV located
//! before the lock bits can be set; the TLV probe completion re-enters
//! `config_tag_read_only`.

use crate::notify::{Notification, TlvResult};
use crate::protocol::{EngineCommand, TlvEvent};
use crate::request::Operation;
use crate::rw::ReaderWriter;
use crate::rw::session::NdefState;
use crate::types::{Family, Status, TlvType};
use log::{debug, warn};

impl ReaderWriter {
    pub(crate) fn set_tag_read_only(&mut self, hard_lock: bool) {
        self.session.hard_lock = hard_lock;
        self.config_tag_read_only();
    }

    /// Issue the next step of the read-only transition.
    fn config_tag_read_only(&mut self) {
        let target = self.session.target;
        let command = if target.family() == Some(Family::T1t) && !self.session.tlv_state.lock_located()
        {
            debug!("locating lock control TLV before setting read-only");
            EngineCommand::locate_tlv(target, TlvType::LockControl)
        } else {
            EngineCommand::set_read_only(target, self.session.hard_lock)
        };

        if let Err(err) = command.and_then(|cmd| self.submit(cmd)) {
            warn!("set read-only failed: {}", err);
            self.fail_current(Status::Failed);
        }
    }

    /// TLV search completion, for stand-alone detection or as a step of
    /// the read-only transition.
    pub(crate) fn handle_tlv_detect(&mut self, event: TlvEvent) {
        let op = self.session.current_op;
        match op {
            Some(Operation::SetReadOnly) => {
                self.session.tlv_state.advance_for_read_only();
                if event.status.is_ok() {
                    self.config_tag_read_only();
                } else {
                    warn!("lock control TLV not located ({})", event.status);
                    self.fail_current(Status::Failed);
                }
            }
            Some(Operation::DetectLockTlv) | Some(Operation::DetectMemTlv) => {
                if op == Some(Operation::DetectLockTlv) {
                    self.session.tlv_state.mark_lock();
                } else {
                    self.session.tlv_state.mark_mem();
                }
                let protocol = self.protocol();
                self.command_complete();
                self.notify(Notification::TlvDetect(TlvResult {
                    status: event.status.ok_or_failed(),
                    protocol,
                    num_bytes: event.num_bytes,
                }));
            }
            other => warn!("unexpected TLV completion during {:?}", other),
        }
    }

    /// Completion of the final set-read-only command.
    pub(crate) fn complete_set_read_only(&mut self, status: Status) {
        self.command_complete();
        if status.is_ok() {
            self.session.ndef_state = NdefState::Unknown;
            if self.session.family() == Some(Family::I93) {
                self.session.tag_read_only = true;
            }
        }
        self.notify(Notification::SetTagReadOnly {
            status: status.ok_or_failed(),
        });
    }
}
