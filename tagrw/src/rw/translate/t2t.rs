// tagrw/src/rw/translate/t2t.rs

use crate::notify::Notification;
use crate::protocol::{EngineCommand, T2tCommand, T2tEvent};
use crate::request::T2tRequest;
use crate::rw::ReaderWriter;
use crate::rw::session::NdefState;

impl ReaderWriter {
    /// Type-2 primitives are only defined for NFC-Forum tags; the command
    /// constructor refuses anything else before the engine sees it.
    pub(crate) fn t2t_primitive(&mut self, request: T2tRequest) {
        let mutates = request.mutates_content();
        let command = EngineCommand::t2t(self.session.target, T2tCommand::from(request));
        if self.submit_for_current(command) && mutates {
            self.session.ndef_state = NdefState::Unknown;
        }
    }

    pub(crate) fn handle_t2t_event(&mut self, event: T2tEvent) {
        match event {
            T2tEvent::ReadComplete(data) => self.complete_read_primitive(data),
            T2tEvent::WriteComplete { status } => {
                self.command_complete();
                self.session.ndef_state = NdefState::Unknown;
                self.notify(Notification::WriteComplete { status });
            }
            T2tEvent::SelectComplete { status } => {
                self.command_complete();
                self.notify(Notification::SelectComplete { status });
            }
            T2tEvent::NdefDetect(event) => self.handle_ndef_detect(event),
            T2tEvent::TlvDetect(event) => self.handle_tlv_detect(event),
            T2tEvent::NdefRead(data) => self.complete_whole_ndef_read(data),
            T2tEvent::NdefWrite { status } => self.complete_ndef_write(status),
            T2tEvent::SetTagReadOnly { status } => self.complete_set_read_only(status),
            T2tEvent::RawFrame(data) => self.handle_raw_frame(data),
            T2tEvent::PresenceCheck { status } => self.handle_presence_check_rsp(status),
            T2tEvent::FormatComplete { status } => self.complete_format(status),
            T2tEvent::InterfaceError { status } => self.handle_interface_error(status),
        }
    }
}
