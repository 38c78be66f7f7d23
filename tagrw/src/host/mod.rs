// tagrw/src/host/mod.rs
//! Collaborators on the host side of the reader/writer.

pub mod mock;
pub mod traits;

pub use mock::{MockRfControl, MockTimer, RecordingNdefHandler, RecordingNotifier};
pub use traits::{NdefHandler, Notifier, PresenceTimer, RfControl};
