// tagrw/src/rw/builder.rs

use crate::config::RwConfig;
use crate::engine::TagEngine;
use crate::host::{NdefHandler, Notifier, PresenceTimer, RfControl};
use crate::rw::ReaderWriter;
use crate::{Error, Result};

/// Helper to construct a ReaderWriter from its collaborators.
#[derive(Default)]
pub struct ReaderWriterBuilder {
    engine: Option<Box<dyn TagEngine>>,
    notifier: Option<Box<dyn Notifier>>,
    ndef: Option<Box<dyn NdefHandler>>,
    rf: Option<Box<dyn RfControl>>,
    timer: Option<Box<dyn PresenceTimer>>,
    config: RwConfig,
}

impl ReaderWriterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_engine(mut self, engine: Box<dyn TagEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn with_ndef_handler(mut self, ndef: Box<dyn NdefHandler>) -> Self {
        self.ndef = Some(ndef);
        self
    }

    pub fn with_rf_control(mut self, rf: Box<dyn RfControl>) -> Self {
        self.rf = Some(rf);
        self
    }

    pub fn with_timer(mut self, timer: Box<dyn PresenceTimer>) -> Self {
        self.timer = Some(timer);
        self
    }

    pub fn with_config(mut self, config: RwConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder. Every collaborator is required; the first
    /// missing one is named in `MissingCollaborator`.
    pub fn build(self) -> Result<ReaderWriter> {
        let engine = self.engine.ok_or(Error::MissingCollaborator("engine"))?;
        let notifier = self
            .notifier
            .ok_or(Error::MissingCollaborator("notifier"))?;
        let ndef = self
            .ndef
            .ok_or(Error::MissingCollaborator("ndef handler"))?;
        let rf = self.rf.ok_or(Error::MissingCollaborator("rf control"))?;
        let timer = self.timer.ok_or(Error::MissingCollaborator("timer"))?;
        Ok(ReaderWriter::new(
            engine,
            notifier,
            ndef,
            rf,
            timer,
            self.config,
        ))
    }
}
