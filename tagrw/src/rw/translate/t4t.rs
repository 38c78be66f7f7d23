// tagrw/src/rw/translate/t4t.rs

use super::failure_status;
use crate::protocol::T4tEvent;
use crate::rw::ReaderWriter;
use crate::types::Status;

impl ReaderWriter {
    pub(crate) fn handle_t4t_event(&mut self, event: T4tEvent) {
        match event {
            T4tEvent::NdefDetect(event) => self.handle_ndef_detect(event),
            T4tEvent::FormatComplete {
                status,
                cur_size,
                max_size,
            } => {
                if status.is_ok() {
                    self.session.ndef_cur_size = cur_size;
                    self.session.ndef_max_size = max_size;
                }
                self.complete_format(status);
            }
            T4tEvent::NdefRead(data) => self.store_ndef_data(&data),
            T4tEvent::NdefReadComplete(data) => {
                self.store_ndef_data(&data);
                self.complete_ndef_read(data.status);
            }
            T4tEvent::NdefReadFail { status } => self.complete_ndef_read(failure_status(status)),
            T4tEvent::NdefUpdateComplete => self.complete_ndef_write(Status::Ok),
            T4tEvent::NdefUpdateFail { status } => self.complete_ndef_write(failure_status(status)),
            T4tEvent::RawFrame(data) => self.handle_raw_frame(data),
            T4tEvent::PresenceCheck { status } => self.handle_presence_check_rsp(status),
            T4tEvent::InterfaceError { status } => self.handle_interface_error(status),
        }
    }
}
