// tagrw/src/rw/router.rs
//! Completion routing: engine events go to the translator of their
//! family; interface errors are answered by whatever was in flight.

use crate::notify::{NdefDetectResult, Notification};
use crate::protocol::EngineEvent;
use crate::request::Operation;
use crate::rw::ReaderWriter;
use crate::rw::session::NdefState;
use crate::types::Status;
use log::{debug, warn};

impl ReaderWriter {
    /// Entry for engine completions.
    pub fn handle_engine_event(&mut self, event: EngineEvent) {
        if !self.session.activated {
            debug!("{} completion dropped: no tag activated", event.family());
            return;
        }
        match event {
            EngineEvent::T1t(event) => self.handle_t1t_event(event),
            EngineEvent::T2t(event) => self.handle_t2t_event(event),
            EngineEvent::T3t(event) => self.handle_t3t_event(event),
            EngineEvent::T4t(event) => self.handle_t4t_event(event),
            EngineEvent::I93(event) => self.handle_i93_event(event),
        }
    }

    /// Link failure reported by the engine of any family.
    pub(crate) fn handle_interface_error(&mut self, status: Status) {
        let status = if status.is_ok() { Status::Failed } else { status };
        warn!(
            "interface error ({}) during {:?}",
            status, self.session.current_op
        );

        if self.session.activation_ntf_pending {
            self.finish_activation(Status::Ok);
            return;
        }

        let protocol = self.protocol();
        match self.session.current_op {
            Some(Operation::PresenceCheck) => self.handle_presence_check_rsp(status),
            Some(Operation::ReadNdef) => {
                self.deliver_ndef_read(status);
                self.command_complete();
                self.notify(Notification::ReadComplete { status });
            }
            Some(Operation::WriteNdef) => {
                self.session.ndef_state = NdefState::Unknown;
                self.session.write_source.clear();
                self.command_complete();
                self.notify(Notification::WriteComplete { status });
            }
            Some(Operation::DetectNdef) => {
                self.command_complete();
                self.notify(Notification::NdefDetect(NdefDetectResult::unknown(
                    status, protocol,
                )));
            }
            Some(_) => self.fail_current(status),
            None => self.notify(Notification::InterfaceError { status }),
        }
    }
}
