// tagrw/src/rw/presence.rs
//! Presence-check scheduling, explicit and periodic.

use crate::notify::Notification;
use crate::protocol::EngineCommand;
use crate::request::{Operation, OperationRequest};
use crate::rw::ReaderWriter;
use crate::types::Status;
use crate::Error;
use log::{debug, warn};

impl ReaderWriter {
    /// Timer expiry. Ignored while no tag is active or a command is in
    /// flight.
    pub fn presence_check_tick(&mut self) {
        if !self.session.activated {
            debug!("presence tick ignored: no tag activated");
            return;
        }
        if self.session.busy {
            debug!("presence tick ignored: {:?} in flight", self.session.current_op);
            return;
        }
        self.session.busy = true;
        self.stop_presence_timer();
        self.session.auto_presence_check_busy = true;
        self.session.current_op = Some(Operation::PresenceCheck);
        self.start_presence_check();
    }

    /// Issue the family liveness probe, or the RF layer's sleep/wake probe
    /// for tags the engine has no probe for.
    pub(crate) fn start_presence_check(&mut self) {
        let result = match EngineCommand::presence_check(self.session.target) {
            Ok(command) => self.submit(command),
            Err(Error::ProtocolMismatch { .. }) => {
                debug!("sleep/wake presence check for {}", self.session.target.protocol);
                self.rf.presence_check()
            }
            Err(err) => Err(err),
        };
        if let Err(err) = result {
            warn!("presence check failed to start: {}", err);
            self.handle_presence_check_rsp(Status::Failed);
        }
    }

    /// Result of the sleep/wake probe started by `RfControl::presence_check`.
    pub fn handle_generic_presence_check_rsp(&mut self, status: Status) {
        if !self.session.is_current(Operation::PresenceCheck) {
            debug!("unsolicited presence check response ({})", status);
            return;
        }
        self.handle_presence_check_rsp(status);
    }

    pub(crate) fn handle_presence_check_rsp(&mut self, status: Status) {
        if status.is_ok() {
            self.command_complete();
        } else {
            // the timer stays off; the link is about to go down
            self.session.busy = false;
            self.session.current_op = None;
        }

        if self.session.auto_presence_check_busy {
            self.session.auto_presence_check_busy = false;
            if let Some(request) = self.session.pending.take() {
                if request == OperationRequest::PresenceCheck {
                    self.notify(Notification::PresenceCheck { status });
                } else if status.is_ok() {
                    debug!("running deferred {:?}", request.operation());
                    self.handle_request(request);
                } else {
                    warn!("deferred {:?} discarded: tag gone", request.operation());
                }
            }
            if !status.is_ok() {
                warn!("automatic presence check failed ({}), deactivating", status);
                self.deactivate_link();
            }
        } else {
            self.notify(Notification::PresenceCheck { status });
            if !status.is_ok() && self.session.not_exclusive_rf {
                self.deactivate_link();
            }
        }
    }
}
