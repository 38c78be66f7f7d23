// tagrw/src/rw/dispatch.rs
//! Admission control. Every application request is either dropped (no
//! tag), rejected with BUSY, deferred behind the automatic presence check
//! or executed.

use crate::notify::Notification;
use crate::protocol::EngineCommand;
use crate::request::{Operation, OperationRequest};
use crate::rw::ReaderWriter;
use crate::types::{Status, TlvType};
use crate::Error;
use log::{debug, warn};

/// What the busy gate did with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// No tag activated; only logged
    Dropped,
    /// Answered with BUSY
    Rejected,
    /// Deferred behind the automatic presence check
    Queued,
    Executed,
}

impl ReaderWriter {
    /// Top-level entry for application requests.
    pub fn handle_request(&mut self, request: OperationRequest) -> Admission {
        let op = request.operation();
        if !self.session.activated {
            warn!("{:?} dropped: {}", op, Error::NotActivated);
            return Admission::Dropped;
        }

        if self.session.busy {
            if self.session.auto_presence_check_busy {
                match self.session.pending.stash(request) {
                    Ok(()) => {
                        debug!("{:?} deferred until presence check completes", op);
                        return Admission::Queued;
                    }
                    Err(err) => warn!("{:?} rejected: {}", op, err),
                }
            } else {
                warn!("{:?} rejected: {:?} in flight", op, self.session.current_op);
            }
            self.reject_busy(op);
            return Admission::Rejected;
        }

        self.execute(request);
        Admission::Executed
    }

    fn reject_busy(&mut self, op: Operation) {
        match op.notification_kind() {
            Some(kind) => {
                let notification = kind.notification(Status::Busy, self.protocol());
                self.notify(notification);
            }
            None => warn!("raw frame dropped while busy"),
        }
    }

    /// Run a request that passed the gate.
    fn execute(&mut self, request: OperationRequest) {
        let op = request.operation();
        self.session.busy = true;
        self.stop_presence_timer();
        self.session.current_op = Some(op);
        debug!("executing {:?}", op);

        match request {
            OperationRequest::DetectNdef => self.detect_ndef(),
            OperationRequest::ReadNdef => self.read_ndef(),
            OperationRequest::WriteNdef(message) => self.write_ndef(message),
            OperationRequest::SendRawFrame(frame) => self.send_raw_frame(&frame),
            OperationRequest::PresenceCheck => self.start_presence_check(),
            OperationRequest::Format => self.format_tag(),
            OperationRequest::DetectLockTlv => self.detect_tlv(TlvType::LockControl),
            OperationRequest::DetectMemTlv => self.detect_tlv(TlvType::MemoryControl),
            OperationRequest::SetReadOnly { hard_lock } => self.set_tag_read_only(hard_lock),
            OperationRequest::T1t(req) => self.t1t_primitive(req),
            OperationRequest::T2t(req) => self.t2t_primitive(req),
            OperationRequest::T3t(req) => self.t3t_primitive(req),
            OperationRequest::I93(req) => self.i93_command(req),
        }
    }

    /// Raw frames go straight to the RF layer. For engine-driven tags the
    /// session stays busy until the engine reports the response; in raw
    /// mode the response arrives as raw-mode data, so the send completes
    /// immediately.
    fn send_raw_frame(&mut self, frame: &[u8]) {
        match self.rf.send_raw_frame(frame) {
            Ok(()) => {
                if self.session.raw_mode {
                    self.command_complete();
                }
            }
            Err(err) => {
                warn!("raw frame send failed: {}", err);
                self.command_complete();
                self.notify(Notification::InterfaceError {
                    status: Status::Failed,
                });
            }
        }
    }

    fn format_tag(&mut self) {
        let command = EngineCommand::format(self.session.target);
        self.submit_for_current(command);
    }

    fn detect_tlv(&mut self, tlv: TlvType) {
        let command = EngineCommand::locate_tlv(self.session.target, tlv);
        self.submit_for_current(command);
    }
}
