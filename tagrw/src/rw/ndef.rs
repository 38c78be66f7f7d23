// tagrw/src/rw/ndef.rs
//! NDEF detect, read and write. Read and write run detection first when
//! the NDEF state of the tag is not yet known, and chain from the
//! detection completion.

use crate::notify::{NdefDetectResult, Notification};
use crate::protocol::{EngineCommand, NdefDetectEvent};
use crate::request::Operation;
use crate::rw::ReaderWriter;
use crate::rw::accumulator::NdefReadBuffer;
use crate::rw::session::NdefState;
use crate::types::Status;
use crate::Error;
use log::{debug, error, warn};

impl ReaderWriter {
    pub(crate) fn detect_ndef(&mut self) {
        self.start_ndef_detection();
    }

    pub(crate) fn read_ndef(&mut self) {
        match self.session.ndef_state {
            NdefState::Unknown => self.start_ndef_detection(),
            NdefState::False => {
                warn!("NDEF read refused: {}", Error::NotNdef);
                self.fail_ndef_read(Error::NotNdef);
            }
            NdefState::True => self.start_ndef_read(),
        }
    }

    pub(crate) fn write_ndef(&mut self, message: Vec<u8>) {
        if let Err(err) = self.ndef.validate(&message) {
            warn!("NDEF write refused: {}", err);
            self.fail_ndef_write(err);
            return;
        }
        self.session.write_source = message;

        match self.session.ndef_state {
            NdefState::Unknown => self.start_ndef_detection(),
            NdefState::False => {
                warn!("NDEF write refused: {}", Error::NotNdef);
                self.fail_ndef_write(Error::NotNdef);
            }
            NdefState::True => self.start_ndef_write(),
        }
    }

    fn start_ndef_detection(&mut self) {
        let result = EngineCommand::detect_ndef(self.session.target).and_then(|cmd| self.submit(cmd));
        if let Err(err) = result {
            warn!("NDEF detection failed to start: {}", err);
            match self.session.current_op {
                Some(Operation::ReadNdef) => self.fail_ndef_read(err),
                Some(Operation::WriteNdef) => self.fail_ndef_write(err),
                _ => self.fail_current(err.status()),
            }
        }
    }

    fn start_ndef_read(&mut self) {
        let size = self.session.ndef_cur_size;
        if size == 0 {
            debug!("NDEF message is empty, nothing to read");
            self.ndef.handle_message(Status::Ok, &[]);
            self.command_complete();
            self.notify(Notification::ReadComplete { status: Status::Ok });
            return;
        }

        if self.session.release_read_buffer() {
            debug!("stale NDEF read buffer released");
        }

        let command = match EngineCommand::read_ndef(self.session.target, size) {
            Ok(command) => command,
            Err(err) => {
                self.fail_ndef_read(err);
                return;
            }
        };

        match NdefReadBuffer::allocate(size) {
            Ok(buffer) => self.session.read_buffer = Some(buffer),
            Err(err) => {
                error!("{}", err);
                self.fail_ndef_read(err);
                return;
            }
        }

        if let Err(err) = self.submit(command) {
            warn!("NDEF read failed to start: {}", err);
            self.fail_ndef_read(err);
        }
    }

    fn start_ndef_write(&mut self) {
        if self.session.tag_read_only {
            warn!("NDEF write refused: {}", Error::ReadOnly);
            self.fail_ndef_write(Error::ReadOnly);
            return;
        }

        let requested = self.session.write_source.len();
        let max = self.session.ndef_max_size;
        if requested > max {
            let err = Error::BufferFull { requested, max };
            warn!("NDEF write refused: {}", err);
            self.fail_ndef_write(err);
            return;
        }

        let message = self.session.write_source.clone();
        let result =
            EngineCommand::write_ndef(self.session.target, message).and_then(|cmd| self.submit(cmd));
        if let Err(err) = result {
            warn!("NDEF write failed to start: {}", err);
            self.fail_ndef_write(err);
        }
    }

    /// End a read that could not run: release the buffer, tell the NDEF
    /// handler, then report read-complete.
    fn fail_ndef_read(&mut self, err: Error) {
        self.session.release_read_buffer();
        self.ndef.handle_message(Status::Failed, &[]);
        self.command_complete();
        self.notify(Notification::ReadComplete {
            status: err.status(),
        });
    }

    fn fail_ndef_write(&mut self, err: Error) {
        self.session.write_source.clear();
        self.command_complete();
        self.notify(Notification::WriteComplete {
            status: err.status(),
        });
    }

    /// Detection completion. Continues a read or write in progress, or
    /// finishes a stand-alone detect.
    pub(crate) fn handle_ndef_detect(&mut self, event: NdefDetectEvent) {
        let protocol = self.protocol();

        if event.status.is_ok() {
            self.session.ndef_state = NdefState::True;
            self.session.ndef_cur_size = event.cur_size;
            self.session.ndef_max_size = event.max_size;
            self.session.tag_read_only = event.flags.is_read_only();
            debug!(
                "NDEF detected: cur={} max={} flags={:#04x}",
                event.cur_size,
                event.max_size,
                event.flags.bits()
            );

            match self.session.current_op {
                Some(Operation::ReadNdef) => self.start_ndef_read(),
                Some(Operation::WriteNdef) => self.start_ndef_write(),
                _ => {
                    self.command_complete();
                    self.notify(Notification::NdefDetect(NdefDetectResult {
                        status: Status::Ok,
                        protocol,
                        cur_size: event.cur_size,
                        max_size: event.max_size,
                        flags: event.flags,
                    }));
                }
            }
            return;
        }

        debug!("NDEF detection failed ({})", event.status);
        self.session.ndef_state = NdefState::False;
        match self.session.current_op {
            Some(Operation::ReadNdef) => self.fail_ndef_read(Error::NotNdef),
            Some(Operation::WriteNdef) => self.fail_ndef_write(Error::NotNdef),
            _ => {
                self.command_complete();
                let result = if event.status == Status::Timeout {
                    // the tag may have moved away
                    NdefDetectResult::unknown(Status::Failed, protocol)
                } else {
                    self.session.ndef_cur_size = event.cur_size;
                    self.session.ndef_max_size = event.max_size;
                    NdefDetectResult {
                        status: Status::Failed,
                        protocol,
                        cur_size: event.cur_size,
                        max_size: event.max_size,
                        flags: event.flags,
                    }
                };
                self.notify(Notification::NdefDetect(result));
            }
        }
    }

    /// Append one segment of NDEF data to the read buffer.
    pub(crate) fn store_ndef_segment(&mut self, segment: &[u8]) {
        match self.session.read_buffer.as_mut() {
            Some(buffer) => {
                if let Err(err) = buffer.append(segment) {
                    error!("NDEF read: {}", err);
                }
            }
            None => warn!("NDEF segment of {} bytes without a read in progress", segment.len()),
        }
    }

    /// Hand the accumulated message to the NDEF handler and release the
    /// buffer. Returns the status the read completes with.
    pub(crate) fn deliver_ndef_read(&mut self, status: Status) -> Status {
        let buffer = self.session.read_buffer.take();
        if !status.is_ok() {
            self.ndef.handle_message(Status::Failed, &[]);
            return status;
        }
        match buffer.map(NdefReadBuffer::finish) {
            Some(Ok(message)) => {
                self.ndef.handle_message(Status::Ok, &message);
                Status::Ok
            }
            Some(Err(err)) => {
                error!("NDEF read failed: {}", err);
                self.ndef.handle_message(Status::Failed, &[]);
                err.status()
            }
            None => {
                warn!("NDEF read completed without a buffer");
                self.ndef.handle_message(Status::Failed, &[]);
                Status::Failed
            }
        }
    }

    /// Finish an NDEF read with the engine's terminal status.
    pub(crate) fn complete_ndef_read(&mut self, status: Status) {
        let status = self.deliver_ndef_read(status);
        self.command_complete();
        self.notify(Notification::ReadComplete {
            status: status.ok_or_failed(),
        });
    }

    /// Finish an NDEF write. The written message becomes the tag's
    /// current size; detection must run again before the next read.
    pub(crate) fn complete_ndef_write(&mut self, status: Status) {
        self.command_complete();
        if status.is_ok() {
            self.session.ndef_cur_size = self.session.write_source.len();
        }
        self.session.ndef_state = NdefState::Unknown;
        self.session.write_source.clear();
        self.notify(Notification::WriteComplete {
            status: status.ok_or_failed(),
        });
    }
}
