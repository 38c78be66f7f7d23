// tagrw/src/rw/translate/t3t.rs

use crate::notify::Notification;
use crate::protocol::{EngineCommand, T3tCommand, T3tEvent};
use crate::request::{Operation, T3tRequest};
use crate::rw::ReaderWriter;
use crate::rw::session::NdefState;
use crate::types::{Status, SystemCode, TagParams};
use log::{debug, warn};

impl ReaderWriter {
    pub(crate) fn t3t_primitive(&mut self, request: T3tRequest) {
        let mutates = request.mutates_content();
        let command = EngineCommand::t3t(self.session.target, T3tCommand::from(request));
        if self.submit_for_current(command) && mutates {
            self.session.ndef_state = NdefState::Unknown;
        }
    }

    pub(crate) fn handle_t3t_event(&mut self, event: T3tEvent) {
        match event {
            T3tEvent::NdefDetect(event) => self.handle_ndef_detect(event),
            T3tEvent::UpdateComplete { status } => {
                if self.session.is_current(Operation::WriteNdef) {
                    self.complete_ndef_write(status);
                } else {
                    self.command_complete();
                    self.session.ndef_state = NdefState::Unknown;
                    self.notify(Notification::WriteComplete { status });
                }
            }
            T3tEvent::Check(data) => {
                if self.session.is_current(Operation::ReadNdef) {
                    self.store_ndef_data(&data);
                } else {
                    self.send_data_to_upper(data);
                }
            }
            T3tEvent::CheckComplete { status } => {
                if self.session.is_current(Operation::ReadNdef) {
                    self.complete_ndef_read(status);
                } else {
                    self.command_complete();
                    self.notify(Notification::ReadComplete { status });
                }
            }
            T3tEvent::RawFrame(data) => self.handle_raw_frame(data),
            T3tEvent::PresenceCheck { status } => self.handle_presence_check_rsp(status),
            T3tEvent::SystemCodes { status, codes } => self.handle_t3t_system_codes(status, codes),
            T3tEvent::FormatComplete { status } => self.complete_format(status),
            T3tEvent::InterfaceError { status } => self.handle_interface_error(status),
        }
    }

    fn handle_t3t_system_codes(&mut self, status: Status, codes: Vec<SystemCode>) {
        if !self.session.activation_ntf_pending {
            debug!("system codes outside activation ({} codes)", codes.len());
            self.command_complete();
            return;
        }
        let system_codes = if status.is_ok() {
            codes
        } else {
            warn!("system code retrieval failed ({})", status);
            Vec::new()
        };
        self.session.pending_params = TagParams::T3t { system_codes };
        self.finish_activation(Status::Ok);
    }
}
