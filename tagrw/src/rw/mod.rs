// tagrw/src/rw/mod.rs
//! Reader/writer state machine.
//!
//! `ReaderWriter` owns the session of the activated tag and the five
//! collaborators it drives. Every input arrives through
//! [`ReaderWriter::handle_event`] (or the matching direct method) and is
//! processed to completion before the next one; nothing blocks.

pub mod accumulator;
mod activation;
pub mod builder;
mod dispatch;
mod ndef;
mod presence;
mod read_only;
mod router;
pub mod session;
mod translate;

pub use accumulator::NdefReadBuffer;
pub use activation::ActivationStep;
pub use builder::ReaderWriterBuilder;
pub use dispatch::Admission;
pub use session::{I93Scratch, NdefState, PendingSlot, Session, TlvState};

use crate::config::RwConfig;
use crate::engine::TagEngine;
use crate::host::{NdefHandler, Notifier, PresenceTimer, RfControl};
use crate::notify::Notification;
use crate::protocol::{DataEvent, EngineCommand, EngineEvent};
use crate::request::{Operation, OperationRequest};
use crate::types::{ActivationParams, Protocol, Status};
use crate::Result;
use log::{debug, warn};

/// Input of the reader/writer event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RwEvent {
    /// Application request
    Request(OperationRequest),
    /// Completion from the tag engine
    Engine(EngineEvent),
    Activate(ActivationParams),
    Deactivate,
    /// Presence-check timer expiry
    PresenceTick,
    /// Result of the RF layer's sleep/wake presence check
    GenericPresenceCheck(Status),
    RawMode(RawModeEvent),
}

/// Traffic of a tag the engine does not drive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawModeEvent {
    Data { status: Status, data: Vec<u8> },
    Deactivated,
}

/// Single-flight reader/writer core.
pub struct ReaderWriter {
    engine: Box<dyn TagEngine>,
    notifier: Box<dyn Notifier>,
    ndef: Box<dyn NdefHandler>,
    rf: Box<dyn RfControl>,
    timer: Box<dyn PresenceTimer>,
    config: RwConfig,
    session: Session,
}

impl ReaderWriter {
    pub fn new(
        engine: Box<dyn TagEngine>,
        notifier: Box<dyn Notifier>,
        ndef: Box<dyn NdefHandler>,
        rf: Box<dyn RfControl>,
        timer: Box<dyn PresenceTimer>,
        config: RwConfig,
    ) -> Self {
        Self {
            engine,
            notifier,
            ndef,
            rf,
            timer,
            config,
            session: Session::new(),
        }
    }

    pub fn builder() -> ReaderWriterBuilder {
        ReaderWriterBuilder::new()
    }

    /// Process one event to completion.
    pub fn handle_event(&mut self, event: RwEvent) {
        match event {
            RwEvent::Request(request) => {
                self.handle_request(request);
            }
            RwEvent::Engine(event) => self.handle_engine_event(event),
            RwEvent::Activate(params) => self.activate(&params),
            RwEvent::Deactivate => self.deactivate(),
            RwEvent::PresenceTick => self.presence_check_tick(),
            RwEvent::GenericPresenceCheck(status) => {
                self.handle_generic_presence_check_rsp(status)
            }
            RwEvent::RawMode(event) => self.handle_raw_mode_event(event),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &RwConfig {
        &self.config
    }

    pub fn is_activated(&self) -> bool {
        self.session.activated
    }

    pub fn is_busy(&self) -> bool {
        self.session.busy
    }

    pub fn current_operation(&self) -> Option<Operation> {
        self.session.current_op
    }

    fn protocol(&self) -> Protocol {
        self.session.target.protocol
    }

    fn notify(&mut self, notification: Notification) {
        debug!(
            "notify {} (status={})",
            notification.name(),
            notification.status()
        );
        self.notifier.notify(notification);
    }

    fn submit(&mut self, command: EngineCommand) -> Result<()> {
        debug!("submit {} to {} engine", command.name(), command.family());
        self.engine.submit(command)
    }

    /// End the in-flight command: clear busy and the current operation,
    /// then re-arm the presence-check timer. Returns the operation that
    /// was in flight.
    fn command_complete(&mut self) -> Option<Operation> {
        self.session.busy = false;
        let op = self.session.current_op.take();
        if let Some(op) = op {
            debug!("{:?} complete", op);
        }
        self.start_presence_timer();
        op
    }

    fn start_presence_timer(&mut self) {
        if self.session.activated
            && self.session.not_exclusive_rf
            && self.config.auto_presence_check
        {
            self.timer.start(self.config.presence_check_interval);
        }
    }

    fn stop_presence_timer(&mut self) {
        self.timer.stop();
    }

    /// Complete the in-flight operation and answer it with `status` in
    /// its notification category. Operations without one are answered
    /// with an interface error.
    fn fail_current(&mut self, status: Status) {
        let protocol = self.protocol();
        let notification = match self.command_complete() {
            Some(op) => match op.notification_kind() {
                Some(kind) => kind.notification(status, protocol),
                None => Notification::InterfaceError { status },
            },
            None => Notification::InterfaceError { status },
        };
        self.notify(notification);
    }

    /// Submit a command for the in-flight operation. When the command
    /// cannot be built or the engine refuses it, the operation fails.
    fn submit_for_current(&mut self, command: Result<EngineCommand>) -> bool {
        match command.and_then(|cmd| self.submit(cmd)) {
            Ok(()) => true,
            Err(err) => {
                warn!("{:?} failed to start: {}", self.session.current_op, err);
                self.fail_current(err.status());
                false
            }
        }
    }

    /// Forward response bytes as a data notification. Timeouts and
    /// empty completions carry nothing to forward.
    fn send_data_to_upper(&mut self, event: DataEvent) {
        if event.status == Status::Timeout {
            return;
        }
        if let Some(data) = event.data {
            self.notify(Notification::Data {
                status: event.status,
                data,
            });
        }
    }

    fn deactivate_link(&mut self) {
        if let Err(err) = self.rf.deactivate() {
            warn!("rf deactivation failed: {}", err);
        }
    }
}
