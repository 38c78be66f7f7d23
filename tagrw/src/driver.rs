// tagrw/src/driver.rs
//! tokio ドライバ (feature `async`)
//!
//! `EventLoop` feeds every message from an unbounded channel into
//! `ReaderWriter::handle_event`, in order. `TokioPresenceTimer` posts
//! `RwEvent::PresenceTick` into the same channel.

use crate::host::PresenceTimer;
use crate::rw::{ReaderWriter, RwEvent};
use log::{debug, info, warn};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Message consumed by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverMessage {
    Event(RwEvent),
    Shutdown,
}

impl From<RwEvent> for DriverMessage {
    fn from(event: RwEvent) -> Self {
        Self::Event(event)
    }
}

/// Presence-check timer backed by a tokio sleep task. A restart aborts the
/// previous task, so at most one tick is ever pending.
pub struct TokioPresenceTimer {
    tx: UnboundedSender<DriverMessage>,
    task: Option<JoinHandle<()>>,
}

impl TokioPresenceTimer {
    pub fn new(tx: UnboundedSender<DriverMessage>) -> Self {
        Self { tx, task: None }
    }

    pub fn is_pending(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl PresenceTimer for TokioPresenceTimer {
    fn start(&mut self, interval: Duration) {
        self.stop();
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(err) => {
                warn!("presence timer not started: {}", err);
                return;
            }
        };
        let tx = self.tx.clone();
        self.task = Some(handle.spawn(async move {
            tokio::time::sleep(interval).await;
            // the loop may already be gone
            let _ = tx.send(DriverMessage::Event(RwEvent::PresenceTick));
        }));
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for TokioPresenceTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Single consumer of reader/writer events.
pub struct EventLoop {
    rw: ReaderWriter,
    rx: UnboundedReceiver<DriverMessage>,
}

impl EventLoop {
    /// Channel shared by the loop, the timer and event producers.
    pub fn channel() -> (UnboundedSender<DriverMessage>, UnboundedReceiver<DriverMessage>) {
        mpsc::unbounded_channel()
    }

    pub fn new(rw: ReaderWriter, rx: UnboundedReceiver<DriverMessage>) -> Self {
        Self { rw, rx }
    }

    /// Process messages until `Shutdown` or until every sender is dropped.
    /// Returns the reader/writer for inspection.
    pub async fn run(mut self) -> ReaderWriter {
        info!("reader/writer event loop started");
        while let Some(message) = self.rx.recv().await {
            match message {
                DriverMessage::Event(event) => {
                    debug!("event loop: {:?}", event);
                    self.rw.handle_event(event);
                }
                DriverMessage::Shutdown => break,
            }
        }
        info!("reader/writer event loop stopped");
        self.rw
    }
}
