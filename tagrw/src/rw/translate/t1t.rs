// tagrw/src/rw/translate/t1t.rs

use crate::protocol::events::t1t::parse_rid;
use crate::protocol::{DataEvent, EngineCommand, T1tCommand, T1tEvent};
use crate::request::T1tRequest;
use crate::rw::ReaderWriter;
use crate::rw::session::NdefState;
use crate::types::{Status, TagParams};
use log::warn;

impl ReaderWriter {
    pub(crate) fn t1t_primitive(&mut self, request: T1tRequest) {
        let mutates = request.mutates_content();
        let command = EngineCommand::t1t(self.session.target, T1tCommand::from(request));
        if self.submit_for_current(command) && mutates {
            self.session.ndef_state = NdefState::Unknown;
        }
    }

    pub(crate) fn handle_t1t_event(&mut self, event: T1tEvent) {
        match event {
            T1tEvent::Rid(data) => self.handle_t1t_rid(data),
            T1tEvent::ReadAllComplete(data)
            | T1tEvent::ReadComplete(data)
            | T1tEvent::ReadSegmentComplete(data)
            | T1tEvent::Read8Complete(data) => self.complete_read_primitive(data),
            T1tEvent::WriteEraseComplete(data)
            | T1tEvent::WriteNoEraseComplete(data)
            | T1tEvent::WriteErase8Complete(data)
            | T1tEvent::WriteNoErase8Complete(data) => self.complete_write_primitive(data),
            T1tEvent::TlvDetect(event) => self.handle_tlv_detect(event),
            T1tEvent::NdefDetect(event) => {
                // NDEF detection walks every TLV
                self.session.tlv_state.mark_complete();
                self.handle_ndef_detect(event);
            }
            T1tEvent::NdefRead(data) => {
                self.session.tlv_state.mark_complete();
                self.complete_whole_ndef_read(data);
            }
            T1tEvent::NdefWrite { status } => {
                self.session.tlv_state.mark_complete();
                self.complete_ndef_write(status);
            }
            T1tEvent::SetTagReadOnly { status } => self.complete_set_read_only(status),
            T1tEvent::RawFrame(data) => self.handle_raw_frame(data),
            T1tEvent::PresenceCheck { status } => self.handle_presence_check_rsp(status),
            T1tEvent::FormatComplete { status } => self.complete_format(status),
            T1tEvent::InterfaceError { status } => self.handle_interface_error(status),
        }
    }

    /// RID answers either the activation step or an application request.
    fn handle_t1t_rid(&mut self, data: DataEvent) {
        if !self.session.activation_ntf_pending {
            self.complete_read_primitive(data);
            return;
        }

        if data.status.is_ok() {
            match data.data.as_deref().map(parse_rid) {
                Some(Ok((hr, uid))) => self.session.pending_params = TagParams::T1t { hr, uid },
                Some(Err(err)) => warn!("RID response unusable, keeping activation params: {}", err),
                None => warn!("RID response without data"),
            }
        } else {
            warn!("RID failed ({}), keeping activation params", data.status);
        }
        self.finish_activation(Status::Ok);
    }
}
