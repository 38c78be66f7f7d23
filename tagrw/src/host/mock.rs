// tagrw/src/host/mock.rs
//! Recording collaborators for tests. Each is a cheap clone around shared
//! state so a test can keep a handle after boxing one into a `ReaderWriter`.

use crate::host::traits::{NdefHandler, Notifier, PresenceTimer, RfControl};
use crate::notify::Notification;
use crate::types::Status;
use crate::{Error, Result};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    events: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn last(&self) -> Option<Notification> {
        self.events.borrow().last().cloned()
    }

    /// Drain everything recorded so far.
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: Notification) {
        self.events.borrow_mut().push(notification);
    }
}

#[derive(Debug, Default)]
struct NdefLog {
    messages: Vec<(Status, Vec<u8>)>,
    validated: Vec<Vec<u8>>,
    reject_validation: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingNdefHandler {
    log: Rc<RefCell<NdefLog>>,
}

impl RecordingNdefHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(Status, Vec<u8>)> {
        self.log.borrow().messages.clone()
    }

    pub fn validated(&self) -> Vec<Vec<u8>> {
        self.log.borrow().validated.clone()
    }

    /// Testing hook: make `validate` refuse every message
    pub fn set_reject_validation(&self, reject: bool) {
        self.log.borrow_mut().reject_validation = reject;
    }
}

impl NdefHandler for RecordingNdefHandler {
    fn validate(&mut self, message: &[u8]) -> Result<()> {
        let mut log = self.log.borrow_mut();
        log.validated.push(message.to_vec());
        if log.reject_validation {
            return Err(Error::InvalidNdef("rejected by test handler".to_string()));
        }
        Ok(())
    }

    fn handle_message(&mut self, status: Status, message: &[u8]) {
        self.log
            .borrow_mut()
            .messages
            .push((status, message.to_vec()));
    }
}

#[derive(Debug, Default)]
struct RfLog {
    deactivations: usize,
    presence_checks: usize,
    raw_frames: Vec<Vec<u8>>,
    raw_mode: bool,
    fail_presence_check: bool,
    fail_raw_frame: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MockRfControl {
    log: Rc<RefCell<RfLog>>,
}

impl MockRfControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deactivations(&self) -> usize {
        self.log.borrow().deactivations
    }

    pub fn presence_checks(&self) -> usize {
        self.log.borrow().presence_checks
    }

    pub fn raw_frames(&self) -> Vec<Vec<u8>> {
        self.log.borrow().raw_frames.clone()
    }

    pub fn raw_mode(&self) -> bool {
        self.log.borrow().raw_mode
    }

    pub fn set_fail_presence_check(&self, fail: bool) {
        self.log.borrow_mut().fail_presence_check = fail;
    }

    pub fn set_fail_raw_frame(&self, fail: bool) {
        self.log.borrow_mut().fail_raw_frame = fail;
    }
}

impl RfControl for MockRfControl {
    fn deactivate(&mut self) -> Result<()> {
        self.log.borrow_mut().deactivations += 1;
        Ok(())
    }

    fn presence_check(&mut self) -> Result<()> {
        let mut log = self.log.borrow_mut();
        if log.fail_presence_check {
            return Err(Error::RfControl("presence check refused".to_string()));
        }
        log.presence_checks += 1;
        Ok(())
    }

    fn send_raw_frame(&mut self, frame: &[u8]) -> Result<()> {
        let mut log = self.log.borrow_mut();
        if log.fail_raw_frame {
            return Err(Error::RfControl("no rf connection".to_string()));
        }
        log.raw_frames.push(frame.to_vec());
        Ok(())
    }

    fn set_raw_mode(&mut self, enabled: bool) -> Result<()> {
        self.log.borrow_mut().raw_mode = enabled;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct TimerLog {
    running: bool,
    starts: usize,
    stops: usize,
    interval: Option<Duration>,
}

/// Presence timer that only records calls; tests fire ticks by hand.
#[derive(Debug, Clone, Default)]
pub struct MockTimer {
    log: Rc<RefCell<TimerLog>>,
}

impl MockTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.log.borrow().running
    }

    pub fn starts(&self) -> usize {
        self.log.borrow().starts
    }

    pub fn stops(&self) -> usize {
        self.log.borrow().stops
    }

    pub fn interval(&self) -> Option<Duration> {
        self.log.borrow().interval
    }
}

impl PresenceTimer for MockTimer {
    fn start(&mut self, interval: Duration) {
        let mut log = self.log.borrow_mut();
        log.running = true;
        log.starts += 1;
        log.interval = Some(interval);
    }

    fn stop(&mut self) {
        let mut log = self.log.borrow_mut();
        log.running = false;
        log.stops += 1;
    }
}
